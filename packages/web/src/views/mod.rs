mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;
