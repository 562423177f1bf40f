mod report_dto;

pub use report_dto::{
    is_image_type_allowed, AiAnalysisDto, LocationDto, ReportResponseDto, SubmitReportDto,
    SubmitReportResponseDto, UpdateReportStatusDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
