//! This crate contains all shared UI for the workspace: view models, the API
//! context, reusable components and the screens the platform packages route to.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod dialog;
pub mod forms;
pub mod render;
pub mod request_state;
pub mod views;

mod provider;
pub use provider::{use_api, use_client_config, ApiContext, ApiProvider};

mod navbar;
pub use navbar::Navbar;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod star_rating;
pub use star_rating::StarRating;

mod tutor_card;
pub use tutor_card::TutorCard;

mod tutor_detail;
pub use tutor_detail::TutorDetailCard;

mod tutor_modal;
pub use tutor_modal::TutorModal;
