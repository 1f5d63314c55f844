pub mod channel_dto;
pub mod channel_list_response;
pub mod channels;
pub mod delete_channel_response;
