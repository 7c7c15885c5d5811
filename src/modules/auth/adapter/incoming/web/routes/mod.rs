pub mod current_user;
pub mod login_user;
pub mod logout_user;
pub mod public_profile;
pub mod register_user;
pub mod resend_verification;
pub mod update_profile;
pub mod verify_email;

pub use current_user::current_user_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use public_profile::public_profile_handler;
pub use register_user::register_user_handler;
pub use resend_verification::resend_verification_handler;
pub use update_profile::update_profile_handler;
pub use verify_email::verify_email_handler;
