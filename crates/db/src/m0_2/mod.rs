mod director_create_table;
mod movie_create_director_id_idx;
mod movie_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "filmapi",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        director_create_table::Operation,
        movie_create_table::Operation,
        movie_create_director_id_idx::Operation
    ]
);
