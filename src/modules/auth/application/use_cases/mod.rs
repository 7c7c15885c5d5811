pub mod fetch_current_user;
pub mod fetch_public_profile;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod resend_verification;
pub mod update_profile;
pub mod verify_email;

#[cfg(test)]
pub mod test_support;
