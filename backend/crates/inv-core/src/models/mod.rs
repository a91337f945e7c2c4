pub mod stored_user;
pub mod user_attributes;
pub mod user_record;
