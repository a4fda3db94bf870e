use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Director;

pub struct Operation;

fn create_director_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Director::Table)
        .col(
            ColumnDef::new(Director::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Director::Name).string().not_null())
        .col(ColumnDef::new(Director::BirthYear).integer().null())
        .to_owned()
}

fn drop_director_table_statement() -> TableDropStatement {
    Table::drop().table(Director::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_director_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_director_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
