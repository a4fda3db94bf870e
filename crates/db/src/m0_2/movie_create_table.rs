use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Director, Movie};

pub struct Operation;

fn create_movie_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Movie::Table)
        .col(
            ColumnDef::new(Movie::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Movie::Title).string().not_null())
        .col(ColumnDef::new(Movie::DirectorId).integer().not_null())
        .col(ColumnDef::new(Movie::Year).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_movie_director")
                .from(Movie::Table, Movie::DirectorId)
                .to(Director::Table, Director::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_movie_table_statement() -> TableDropStatement {
    Table::drop().table(Movie::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_movie_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_movie_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
