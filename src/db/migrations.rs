/// SQL migration for the schedule store
///
/// - One row per route; writes upsert
/// - Timestamps stored as "YYYY-MM-DD HH:MM:SS" UTC text
pub const MIGRATION_001: &str = r#"
-- =============================================================================
-- Collection schedules - stored overrides of the bundled default dates
-- =============================================================================
CREATE TABLE IF NOT EXISTS collection_schedules (
    route           TEXT PRIMARY KEY,       -- e.g., "LONDON ROUTE"
    collection_date TEXT NOT NULL,          -- free text, e.g., "6th of September"
    updated_at      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_collection_schedules_updated ON collection_schedules(updated_at);

"#;

/// All migrations in apply order
pub const MIGRATIONS: &[(&str, &str)] = &[("migration_001", MIGRATION_001)];

/// Split a migration script into executable statements
///
/// SQLite prepares one statement at a time, so scripts are split on ';'
/// with leading comment lines stripped.
pub fn split_statements(script: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    for statement in script.split(';') {
        let mut stmt = statement.trim();
        while stmt.starts_with("--") {
            match stmt.find('\n') {
                Some(idx) => stmt = stmt[idx + 1..].trim(),
                None => {
                    stmt = "";
                    break;
                }
            }
        }
        if !stmt.is_empty() {
            statements.push(stmt);
        }
    }
    statements
}
