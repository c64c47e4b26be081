mod row;
mod table;

pub use row::UserRow;
pub use table::UsersTable;
