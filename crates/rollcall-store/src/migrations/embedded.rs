//! Embedded SQL migrations

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}

/// Domain tables created by the migrations, children first
pub const DOMAIN_TABLES: [&str; 3] = ["memberships", "guests", "events"];
