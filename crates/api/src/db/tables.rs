//! Compile-time–checked column identifiers for all tables.

use sea_query::Iden;

#[derive(Iden)]
pub enum Events {
    Table,
    Id,
    Title,
    Description,
    Date,
}

#[derive(Iden)]
pub enum Notes {
    Table,
    Id,
    Title,
    Content,
    ImageUrl,
    IsPrivate,
    SharedWith,
    CreatedAt,
}
