//! Quoted output for every built-in dialect, checked against sqlparser.

use sqlident::prelude::*;

use insta::assert_snapshot;
use sqlparser::dialect::{
    BigQueryDialect, DuckDbDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
    SQLiteDialect, SnowflakeDialect,
};
use sqlparser::parser::Parser;

// Same mapping as `validate_sql` in src/sql/test_utils.rs, which is not
// visible from integration tests. Keep the two in sync when adding a dialect.
fn parses(sql: &str, dialect: Dialect) -> bool {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::MySql => Box::new(MySqlDialect {}),
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::TSql => Box::new(MsSqlDialect {}),
        Dialect::DuckDb => Box::new(DuckDbDialect {}),
        Dialect::Snowflake => Box::new(SnowflakeDialect {}),
        Dialect::BigQuery => Box::new(BigQueryDialect {}),
    };
    Parser::parse_sql(&*parser_dialect, sql).is_ok()
}

fn select(engine: &Engine, columns: &str, table: &str) -> String {
    format!(
        "SELECT {} FROM {}",
        engine.quote_columns(columns),
        engine.quote(table, false)
    )
}

fn select_for(dialect: Dialect, policy: QuotePolicy) -> String {
    let engine = Engine::new(dialect).with_quote_policy(policy);
    select(&engine, "id,order,total", "sales.orders")
}

#[test]
fn test_postgres_select() {
    assert_snapshot!(
        select_for(Dialect::Postgres, QuotePolicy::AddAlways),
        @r#"SELECT "id","order","total" FROM "sales"."orders""#
    );
    assert_snapshot!(
        select_for(Dialect::Postgres, QuotePolicy::AddReserved),
        @r#"SELECT id,"order",total FROM sales.orders"#
    );
}

#[test]
fn test_mysql_select() {
    assert_snapshot!(
        select_for(Dialect::MySql, QuotePolicy::AddAlways),
        @"SELECT `id`,`order`,`total` FROM `sales`.`orders`"
    );
    assert_snapshot!(
        select_for(Dialect::MySql, QuotePolicy::AddReserved),
        @"SELECT id,`order`,total FROM sales.orders"
    );
}

#[test]
fn test_tsql_select() {
    assert_snapshot!(
        select_for(Dialect::TSql, QuotePolicy::AddAlways),
        @"SELECT [id],[order],[total] FROM [sales].[orders]"
    );
    assert_snapshot!(
        select_for(Dialect::TSql, QuotePolicy::AddReserved),
        @"SELECT id,[order],total FROM sales.orders"
    );
}

#[test]
fn test_every_dialect_output_parses() {
    for dialect in Dialect::ALL {
        for policy in [QuotePolicy::AddAlways, QuotePolicy::AddReserved] {
            let sql = select_for(dialect, policy);
            assert!(parses(&sql, dialect), "{dialect} {policy}: {sql}");
        }
    }
}

#[test]
fn test_foreign_quotes_rewritten_for_each_dialect() {
    let input = "`sales`.\"orders\"";
    for dialect in Dialect::ALL {
        let engine = Engine::new(dialect);
        let (p, s) = dialect.quote_pair();
        let quoted = engine.quote(input, false);
        match dialect {
            // A `"` segment is bare text for backtick and bracket dialects.
            Dialect::MySql | Dialect::Sqlite | Dialect::BigQuery | Dialect::TSql => {
                assert_eq!(quoted, format!("{p}sales{s}.{p}\"orders\"{s}"), "{dialect}")
            }
            Dialect::Postgres | Dialect::DuckDb | Dialect::Snowflake => {
                assert_eq!(quoted, format!("{p}sales{s}.{p}orders{s}"), "{dialect}")
            }
        }
    }
}

#[test]
fn test_quote_join_with_for_update_assignments() {
    let engine = Engine::new(Dialect::Sqlite);
    let sets = quote_join_with(
        &["name", "updated_at"],
        |c| format!("{} = ?", engine.quote(c, true)),
        ",",
    );
    assert_snapshot!(sets, @"`name` = ?, `updated_at` = ?");
    assert!(parses(&format!("UPDATE `users` SET {sets}"), Dialect::Sqlite));
}

#[test]
fn test_reserved_lookup_is_case_insensitive() {
    for dialect in Dialect::ALL {
        for word in ["select", "SELECT", "Select"] {
            assert!(dialect.is_reserved(word), "{dialect}: {word}");
        }
        assert!(!dialect.is_reserved("customer_id"), "{dialect}");
        assert!(!dialect.is_reserved(""), "{dialect}");
    }
}

#[test]
fn test_custom_dialect_via_config() {
    let ansi = sqlident::dialect::Ansi;
    let q = QuoteConfig::new(&ansi, QuoteMode::TableOnly, QuotePolicy::AddAlways);
    assert_eq!(quote(&q, "public.t", false), "\"public\".\"t\"");
    assert_eq!(quote(&q, "c", true), "c");
    assert_eq!(quote_all(&q, &["a", "b"], false), vec!["\"a\"", "\"b\""]);
}
