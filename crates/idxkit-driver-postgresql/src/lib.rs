mod query;

mod statement_cache;
use statement_cache::StatementCache;

use idxkit_core::{
    schema::{IndexCatalogEntry, Oid, OperatorClass},
    Catalog, Error, Result,
};
use log::{error, trace};
use postgres::{
    tls::MakeTlsConnect,
    types::{ToSql, Type},
    Row, Socket,
};
use std::collections::HashMap;
use tokio_postgres::{Client, Config};
use url::Url;

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,

    /// Schema to enumerate indexes in. `None` uses the search path.
    schema: Option<String>,

    /// Prepared catalog statements.
    statements: StatementCache,
}

impl PostgreSQL {
    /// Initialize an idxkit PostgreSQL catalog using an initialized connection.
    pub fn new(connection: Client) -> Self {
        Self {
            client: connection,
            schema: None,
            statements: StatementCache::new(),
        }
    }

    /// Connects to a PostgreSQL database using a connection string.
    ///
    /// See [`postgres::Client::connect`] for more information.
    pub async fn connect(url: &str) -> Result<Self> {
        let config = config_from_url(url)?;
        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`postgres::Config`].
    ///
    /// See [`postgres::Client::configure`] for more information.
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }

    /// Restricts index enumeration to `schema` instead of the search path.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    async fn query(
        &self,
        sql: &str,
        types: &[Type],
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let statement = self
            .statements
            .prepare_typed(&self.client, sql, types)
            .await
            .map_err(Error::driver)?;

        self.client
            .query(&statement, params)
            .await
            .map_err(Error::driver)
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

#[idxkit_core::async_trait]
impl Catalog for PostgreSQL {
    async fn index_entries(&self, table: &str) -> Result<Vec<IndexCatalogEntry>> {
        trace!("listing indexes; table={} schema={:?}", table, self.schema);

        let rows = self
            .query(
                query::INDEX_ENTRIES,
                &[Type::TEXT, Type::TEXT],
                &[&table, &self.schema.as_deref()],
            )
            .await?;

        rows.iter().map(entry_from_row).collect()
    }

    async fn column_names(&self, relation: Oid, attnums: &[i16]) -> Result<HashMap<i16, String>> {
        trace!("resolving columns; relation={} attnums={:?}", relation, attnums);

        let rows = self
            .query(
                query::COLUMN_NAMES,
                &[Type::OID, Type::INT2_ARRAY],
                &[&relation.0, &attnums],
            )
            .await?;

        rows.iter()
            .map(|row| {
                let attnum: i16 = row.try_get("attnum").map_err(Error::driver)?;
                let name: String = row.try_get("attname").map_err(Error::driver)?;
                Ok((attnum, name))
            })
            .collect()
    }

    async fn operator_class(&self, oid: Oid) -> Result<Option<OperatorClass>> {
        trace!("resolving operator class; oid={}", oid);

        let rows = self
            .query(query::OPERATOR_CLASS, &[Type::OID], &[&oid.0])
            .await?;

        let Some(row) = rows.first() else {
            return Ok(None);
        };

        Ok(Some(OperatorClass {
            name: row.try_get("opcname").map_err(Error::driver)?,
            is_default: row.try_get("opcdefault").map_err(Error::driver)?,
        }))
    }
}

/// Builds a connection config from a `postgresql://` URL.
pub(crate) fn config_from_url(url: &str) -> Result<Config> {
    let url = Url::parse(url)
        .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

    if url.scheme() != "postgresql" {
        return Err(Error::invalid_connection_url(format!(
            "connection URL does not have a `postgresql` scheme; url={url}"
        )));
    }

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| Error::invalid_connection_url(format!("missing host; url={url}")))?;

    let dbname = url.path().trim_start_matches('/');

    if dbname.is_empty() {
        return Err(Error::invalid_connection_url(format!(
            "no database specified - missing path in connection URL; url={url}"
        )));
    }

    let mut config = Config::new();
    config.host(host);
    config.dbname(dbname);

    if let Some(port) = url.port() {
        config.port(port);
    }

    if !url.username().is_empty() {
        config.user(url.username());
    }

    if let Some(password) = url.password() {
        config.password(password);
    }

    Ok(config)
}

fn entry_from_row(row: &Row) -> Result<IndexCatalogEntry> {
    let operator_class_oids: Vec<u32> =
        row.try_get("operator_class_oids").map_err(Error::driver)?;

    let entry = IndexCatalogEntry {
        name: row.try_get("name").map_err(Error::driver)?,
        unique: row.try_get("is_unique").map_err(Error::driver)?,
        key_attnums: row.try_get("key_attnums").map_err(Error::driver)?,
        definition: row.try_get("definition").map_err(Error::driver)?,
        relation: Oid(row.try_get("relation").map_err(Error::driver)?),
        access_method: row.try_get("access_method").map_err(Error::driver)?,
        operator_class_oids: operator_class_oids.into_iter().map(Oid).collect(),
        sort_options: row.try_get("sort_options").map_err(Error::driver)?,
    };

    check_entry(entry)
}

/// Rejects rows whose per-key vectors disagree in length.
fn check_entry(entry: IndexCatalogEntry) -> Result<IndexCatalogEntry> {
    let keys = entry.key_attnums.len();

    if entry.operator_class_oids.len() != keys || entry.sort_options.len() != keys {
        return Err(Error::invalid_result(format!(
            "index `{}` has {} keys, {} operator classes and {} sort options",
            entry.name,
            keys,
            entry.operator_class_oids.len(),
            entry.sort_options.len()
        )));
    }

    Ok(entry)
}
