//! MySQL/MariaDB schema source over a single sqlx connection.

use crudgen_core::{CodeGroup, CodeItem, RawColumn};
use sqlx::{
    Connection, MySqlConnection, Row,
    mysql::{MySqlConnectOptions, MySqlRow},
};
use tokio::runtime::Runtime;

use crate::{CodeSource, DatabaseConfig, Error, Result, SchemaSource};

const LIST_TABLES: &str = "SELECT CAST(TABLE_NAME AS CHAR) FROM INFORMATION_SCHEMA.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() ORDER BY TABLE_NAME";

const TABLE_COMMENT: &str = "SELECT CAST(TABLE_COMMENT AS CHAR) FROM INFORMATION_SCHEMA.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?";

const COLUMNS: &str = "SELECT CAST(COLUMN_NAME AS CHAR), CAST(DATA_TYPE AS CHAR), \
     CAST(IS_NULLABLE AS CHAR), CAST(COLUMN_KEY AS CHAR), CAST(COLUMN_DEFAULT AS CHAR), \
     CAST(EXTRA AS CHAR), CAST(COLUMN_COMMENT AS CHAR), CAST(COLUMN_TYPE AS CHAR) \
     FROM INFORMATION_SCHEMA.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? ORDER BY ORDINAL_POSITION";

const LIST_CODES: &str = "SELECT CAST(code AS CHAR), CAST(codeName AS CHAR), \
     CAST(description AS CHAR) FROM code ORDER BY code";

const CODE: &str = "SELECT CAST(code AS CHAR), CAST(codeName AS CHAR), \
     CAST(description AS CHAR) FROM code WHERE code = ?";

const CODE_ITEMS: &str = "SELECT CAST(codeKey AS CHAR), CAST(codeValue AS CHAR), \
     CAST(sortOrder AS SIGNED) FROM code_item WHERE code = ? ORDER BY sortOrder";

/// A live connection to the configured database.
///
/// Queries block the caller on a private current-thread runtime, so the
/// rest of the program stays synchronous.
pub struct MySqlSource {
    runtime: Runtime,
    conn: MySqlConnection,
}

impl MySqlSource {
    /// Open one connection using the `[database]` settings.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let password = config.resolve_password()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Box::new(Error::Runtime { source: e }))?;

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&password)
            .database(&config.database)
            .charset(&config.charset);

        log::info!(
            "Connecting to {}:{}/{}",
            config.host,
            config.port,
            config.database
        );
        let conn = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(|e| {
                Box::new(Error::Connection {
                    host: config.host.clone(),
                    port: config.port,
                    database: config.database.clone(),
                    source: e,
                })
            })?;

        Ok(Self { runtime, conn })
    }

    /// Close the connection gracefully.
    pub fn close(self) -> Result<()> {
        let Self { runtime, conn } = self;
        runtime
            .block_on(conn.close())
            .map_err(|e| Error::query("closing the connection", e))?;
        log::debug!("Connection closed");
        Ok(())
    }

    fn fetch_all(&mut self, sql: &str, arg: Option<&str>, context: &str) -> Result<Vec<MySqlRow>> {
        log::debug!("{}", sql);
        let mut query = sqlx::query(sql);
        if let Some(arg) = arg {
            query = query.bind(arg.to_string());
        }
        let conn = &mut self.conn;
        self.runtime
            .block_on(query.fetch_all(&mut *conn))
            .map_err(|e| Error::query(context, e))
    }
}

fn text(row: &MySqlRow, index: usize, context: &str) -> Result<Option<String>> {
    row.try_get::<Option<String>, _>(index)
        .map_err(|e| Error::query(context, e))
}

fn code_group(row: &MySqlRow) -> Result<CodeGroup> {
    let context = "reading the code table";
    Ok(CodeGroup {
        code: text(row, 0, context)?.unwrap_or_default(),
        name: text(row, 1, context)?.unwrap_or_default(),
        description: text(row, 2, context)?,
    })
}

impl SchemaSource for MySqlSource {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        let context = "listing tables";
        self.fetch_all(LIST_TABLES, None, context)?
            .iter()
            .map(|row| Ok(text(row, 0, context)?.unwrap_or_default()))
            .collect()
    }

    fn fetch_table_comment(&mut self, table: &str) -> Result<String> {
        let context = "reading the table comment";
        let rows = self.fetch_all(TABLE_COMMENT, Some(table), context)?;
        match rows.first() {
            Some(row) => Ok(text(row, 0, context)?.unwrap_or_default()),
            None => Ok(String::new()),
        }
    }

    fn fetch_columns(&mut self, table: &str) -> Result<Vec<RawColumn>> {
        let context = "reading columns";
        self.fetch_all(COLUMNS, Some(table), context)?
            .iter()
            .map(|row| {
                let get = |i| text(row, i, context).map(Option::unwrap_or_default);
                Ok(RawColumn {
                    name: get(0)?,
                    data_type: get(1)?.to_lowercase(),
                    is_nullable: get(2)?.eq_ignore_ascii_case("YES"),
                    column_key: get(3)?,
                    default: text(row, 4, context)?,
                    extra: get(5)?,
                    comment: get(6)?,
                    column_type: get(7)?,
                })
            })
            .collect()
    }
}

impl CodeSource for MySqlSource {
    fn list_codes(&mut self) -> Result<Vec<CodeGroup>> {
        self.fetch_all(LIST_CODES, None, "listing codes")?
            .iter()
            .map(code_group)
            .collect()
    }

    fn fetch_code(&mut self, code: &str) -> Result<Option<CodeGroup>> {
        let rows = self.fetch_all(CODE, Some(code), "reading the code table")?;
        rows.first().map(code_group).transpose()
    }

    fn fetch_code_items(&mut self, code: &str) -> Result<Vec<CodeItem>> {
        let context = "reading code items";
        self.fetch_all(CODE_ITEMS, Some(code), context)?
            .iter()
            .map(|row| {
                Ok(CodeItem {
                    key: text(row, 0, context)?.unwrap_or_default(),
                    value: text(row, 1, context)?.unwrap_or_default(),
                    sort_order: row
                        .try_get::<Option<i64>, _>(2)
                        .map_err(|e| Error::query(context, e))?
                        .unwrap_or_default(),
                })
            })
            .collect()
    }
}
