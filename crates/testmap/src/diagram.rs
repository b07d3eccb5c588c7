//! The fixed ERD definitions for the test-management schema.
//!
//! Two PlantUML blocks are provided as constants: [`CONCEPTUAL_ERD`] with
//! entities and named relationships, and [`LOGICAL_ERD`] with tables,
//! columns, and keys. Both are opaque text from this crate's perspective and
//! are emitted verbatim; [`ErdKind`] selects between them.

/// Conceptual entity-relationship diagram.
///
/// High-level view: the seven schema entities and their named relationships,
/// without attribute detail. Each entity is declared exactly once.
pub const CONCEPTUAL_ERD: &str = r#"@startuml Conceptual_ERD
!define ENTITY_COLOR #E3F2FD
!define RELATIONSHIP_COLOR #90CAF9

skinparam class {
    BackgroundColor ENTITY_COLOR
    BorderColor #1976D2
    ArrowColor RELATIONSHIP_COLOR
}

entity "Project" as project
entity "Sub-Project" as subproject
entity "Tester" as tester
entity "Test Suite" as testsuite
entity "Test Case" as testcase
entity "Test Execution" as execution
entity "Bug/Issue" as bug

project ||--o{ subproject : "contains"
project ||--o{ testsuite : "has"
project ||--o{ bug : "tracks"
testsuite ||--o{ testcase : "groups"
testcase ||--o{ execution : "executed in"
testcase ||--o| bug : "linked to"
tester ||--o{ execution : "performs"
tester ||--o{ bug : "discovers"
tester ||--o{ bug : "assigned to"

@enduml"#;

/// Logical entity-relationship diagram.
///
/// Table-level view: each table with its primary key, typed columns, and
/// foreign-key columns, followed by the relationship list over table names.
pub const LOGICAL_ERD: &str = r#"@startuml Logical_ERD
!define PRIMARY_KEY <u>
!define FOREIGN_KEY <i>

skinparam class {
    BackgroundColor #E8F5E9
    BorderColor #388E3C
}

entity "projects" {
    PRIMARY_KEY project_id : INTEGER
    --
    name : VARCHAR(255)
    description : TEXT
    start_date : DATE
    end_date : DATE
    status : VARCHAR(50)
    created_date : TIMESTAMP
}

entity "sub_projects" {
    PRIMARY_KEY sub_project_id : INTEGER
    --
    FOREIGN_KEY project_id : INTEGER
    name : VARCHAR(255)
    description : TEXT
}

entity "testers" {
    PRIMARY_KEY tester_id : INTEGER
    --
    name : VARCHAR(255)
    email : VARCHAR(255)
    role : VARCHAR(100)
    date_joined : DATE
}

entity "test_suites" {
    PRIMARY_KEY test_suite_id : INTEGER
    --
    FOREIGN_KEY project_id : INTEGER
    name : VARCHAR(255)
    description : TEXT
    created_date : TIMESTAMP
}

entity "test_cases" {
    PRIMARY_KEY test_case_id : INTEGER
    --
    FOREIGN_KEY test_suite_id : INTEGER
    name : VARCHAR(255)
    description : TEXT
    preconditions : TEXT
    steps : TEXT
    expected_result : TEXT
    priority : VARCHAR(50)
    created_date : TIMESTAMP
}

entity "test_executions" {
    PRIMARY_KEY execution_id : INTEGER
    --
    FOREIGN_KEY test_case_id : INTEGER
    FOREIGN_KEY tester_id : INTEGER
    status : VARCHAR(50)
    notes : TEXT
    execution_date : TIMESTAMP
}

entity "bugs" {
    PRIMARY_KEY bug_id : INTEGER
    --
    FOREIGN_KEY project_id : INTEGER
    FOREIGN_KEY sub_project_id : INTEGER
    FOREIGN_KEY test_case_id : INTEGER
    FOREIGN_KEY discovered_by : INTEGER
    FOREIGN_KEY assigned_to : INTEGER
    name : VARCHAR(255)
    description : TEXT
    steps_to_reproduce : TEXT
    status : VARCHAR(50)
    severity : VARCHAR(50)
    priority : VARCHAR(50)
    type : VARCHAR(50)
    environment : VARCHAR(255)
    discovered_date : TIMESTAMP
    assigned_date : TIMESTAMP
    resolution_date : TIMESTAMP
}

projects ||--o{ sub_projects
projects ||--o{ test_suites
projects ||--o{ bugs
test_suites ||--o{ test_cases
test_cases ||--o{ test_executions
test_cases ||--o| bugs
testers ||--o{ test_executions
testers ||--o{ bugs : "discovers"
testers ||--o{ bugs : "assigned"

@enduml"#;

/// The two fixed diagrams shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErdKind {
    /// Entity/relationship view without attribute detail.
    Conceptual,
    /// Table view including attributes, primary and foreign keys.
    Logical,
}

impl ErdKind {
    /// Returns the PlantUML source text for this diagram.
    pub fn source(self) -> &'static str {
        match self {
            Self::Conceptual => CONCEPTUAL_ERD,
            Self::Logical => LOGICAL_ERD,
        }
    }

    /// Returns the diagram name used in its `@startuml` header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Conceptual => "Conceptual_ERD",
            Self::Logical => "Logical_ERD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONCEPTUAL_ENTITIES: [&str; 7] = [
        "Project",
        "Sub-Project",
        "Tester",
        "Test Suite",
        "Test Case",
        "Test Execution",
        "Bug/Issue",
    ];

    const LOGICAL_TABLES: [&str; 7] = [
        "projects",
        "sub_projects",
        "testers",
        "test_suites",
        "test_cases",
        "test_executions",
        "bugs",
    ];

    #[test]
    fn conceptual_declares_each_entity_exactly_once() {
        for name in CONCEPTUAL_ENTITIES {
            let declaration = format!("entity \"{name}\"");
            assert_eq!(
                CONCEPTUAL_ERD.matches(declaration.as_str()).count(),
                1,
                "entity {name} should be declared exactly once"
            );
        }
    }

    #[test]
    fn conceptual_names_each_relationship() {
        let relationships = [
            "contains",
            "has",
            "tracks",
            "groups",
            "executed in",
            "linked to",
            "performs",
            "discovers",
            "assigned to",
        ];

        for relationship in relationships {
            let label = format!(": \"{relationship}\"");
            assert!(
                CONCEPTUAL_ERD.contains(label.as_str()),
                "relationship {relationship} should be present"
            );
        }
    }

    #[test]
    fn logical_declares_each_table() {
        for table in LOGICAL_TABLES {
            let declaration = format!("entity \"{table}\" {{");
            assert!(
                LOGICAL_ERD.contains(declaration.as_str()),
                "table {table} should be declared"
            );
        }
    }

    #[test]
    fn logical_gives_every_table_a_primary_key() {
        // One PRIMARY_KEY line per table, plus the !define at the top.
        assert_eq!(
            LOGICAL_ERD.matches("PRIMARY_KEY").count(),
            LOGICAL_TABLES.len() + 1
        );
    }

    #[test]
    fn sources_open_with_their_titles() {
        for kind in [ErdKind::Conceptual, ErdKind::Logical] {
            let header = format!("@startuml {}", kind.title());
            assert!(kind.source().starts_with(header.as_str()));
            assert!(kind.source().ends_with("@enduml"));
        }
    }
}
