pub const INPUT_DEVICE_MODEL: &str = "deviceModel";
pub const BUTTON_PROCESS: &str = "processBtn";
pub const PANEL_PROGRESS: &str = "progressContainer";
pub const PROGRESS_BAR: &str = "progressBar";
pub const LABEL_PROGRESS_STATUS: &str = "progressStatus";
pub const STEP_PREFIX: &str = "step";
pub const PANEL_DOWNLOAD: &str = "downloadSection";
pub const LINK_DOWNLOAD: &str = "downloadLink";
pub const CONTAINER_NOTIFICATIONS: &str = "notificationContainer";

pub const EXAMPLE_MODELS: [&str; 3] = ["CPH2649", "SM-X910", "RMX5011"];
