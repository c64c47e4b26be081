pub mod admin_dashboard;
pub mod admin_users;
pub mod home;
pub mod login;
pub mod register;
pub mod user_dashboard;

pub use admin_dashboard::AdminDashboardPage;
pub use admin_users::ManageUsersPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use user_dashboard::UserDashboardPage;
