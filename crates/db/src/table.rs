use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Account {
    Table,
    Id,
    Username,
    Password,
    Role,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Director {
    Table,
    Id,
    Name,
    BirthYear,
}

#[derive(Iden, Clone)]
pub enum Movie {
    Table,
    Id,
    Title,
    DirectorId,
    Year,
}
