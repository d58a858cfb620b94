//! Shared repository utilities.

use sqlx::{Postgres, QueryBuilder};

/// Appends WHERE or AND depending on whether a clause was already pushed.
pub fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_clause: &mut bool) {
    if *has_clause {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_clause = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_clause_switches_from_where_to_and() {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT 1 FROM games");
        let mut has_clause = false;

        push_clause(&mut builder, &mut has_clause);
        builder.push("organization_id = 'org'");
        push_clause(&mut builder, &mut has_clause);
        builder.push("deleted_at IS NULL");

        assert_eq!(
            builder.sql(),
            "SELECT 1 FROM games WHERE organization_id = 'org' AND deleted_at IS NULL"
        );
    }
}
