mod notification_dto;

pub use notification_dto::{
    CreateNotificationDto, MarkReadDto, MarkReadResultDto, NotificationResponseDto,
};
