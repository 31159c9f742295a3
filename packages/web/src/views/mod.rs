mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod search;
pub use search::Search;

mod students;
pub use students::StudentDashboard;

mod admin;
pub use admin::Admin;
