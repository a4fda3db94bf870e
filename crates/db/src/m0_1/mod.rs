mod account_create_table;
mod account_create_username_idx;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "filmapi",
    "m0_1",
    vec_box![],
    vec_box![
        account_create_table::Operation,
        account_create_username_idx::Operation
    ]
);
