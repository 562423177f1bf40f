mod auth_dto;

pub use auth_dto::{AdminUserDto, LoginRequestDto, LoginResponseDto};
