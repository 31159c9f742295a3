mod admin;
pub use admin::AdminView;

mod chat_box;
pub use chat_box::RecommenderChat;

mod form_field;

mod home;
pub use home::HomeView;

mod search;
pub use search::SearchView;

mod student_dashboard;
pub use student_dashboard::StudentDashboardView;

mod student_form;
pub use student_form::StudentForm;

mod student_manager;
pub use student_manager::StudentManager;

mod tutor_form;
pub use tutor_form::TutorForm;

mod tutor_manager;
pub use tutor_manager::TutorManager;
