use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MedihelpError {
    /// 上游返回 429
    Throttled(String),
    /// 上游返回非 200 状态码
    UpstreamStatus(u16),
    MalformedResponse(String),
    Unreachable(String),
    /// IP 定位接口返回了非 success 状态
    LocationLookup(String),
    LocationUnavailable(String),
    Validation(String),
    Config(String),
    Serialization(String),
    FileOperation(String),
}

impl MedihelpError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MedihelpError::Throttled(_) => "E001",
            MedihelpError::UpstreamStatus(_) => "E002",
            MedihelpError::MalformedResponse(_) => "E003",
            MedihelpError::Unreachable(_) => "E004",
            MedihelpError::LocationLookup(_) => "E005",
            MedihelpError::LocationUnavailable(_) => "E006",
            MedihelpError::Validation(_) => "E007",
            MedihelpError::Config(_) => "E008",
            MedihelpError::Serialization(_) => "E009",
            MedihelpError::FileOperation(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MedihelpError::Throttled(_) => "Upstream Throttled",
            MedihelpError::UpstreamStatus(_) => "Upstream Unavailable",
            MedihelpError::MalformedResponse(_) => "Malformed Upstream Response",
            MedihelpError::Unreachable(_) => "Upstream Unreachable",
            MedihelpError::LocationLookup(_) => "Location Lookup Failed",
            MedihelpError::LocationUnavailable(_) => "Location Unavailable",
            MedihelpError::Validation(_) => "Validation Error",
            MedihelpError::Config(_) => "Configuration Error",
            MedihelpError::Serialization(_) => "Serialization Error",
            MedihelpError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            MedihelpError::UpstreamStatus(status) => format!("status code {}", status),
            MedihelpError::Throttled(msg)
            | MedihelpError::MalformedResponse(msg)
            | MedihelpError::Unreachable(msg)
            | MedihelpError::LocationLookup(msg)
            | MedihelpError::LocationUnavailable(msg)
            | MedihelpError::Validation(msg)
            | MedihelpError::Config(msg)
            | MedihelpError::Serialization(msg)
            | MedihelpError::FileOperation(msg) => msg.clone(),
        }
    }

    /// Text shown to the person asking for nearby facilities.
    ///
    /// Upstream failures get a fixed sentence per failure mode so that the
    /// caller never sees raw transport details, except for `Unreachable`
    /// where the cause is the only useful hint. Validation errors are
    /// already written for the caller and pass through unchanged.
    pub fn user_message(&self) -> String {
        match self {
            MedihelpError::Throttled(_) => {
                "Too many requests. Please try again in a few minutes.".to_string()
            }
            MedihelpError::UpstreamStatus(status) => format!(
                "Server returned status code {}. Please try again later.",
                status
            ),
            MedihelpError::MalformedResponse(_) => {
                "Invalid response from server. Please try again later.".to_string()
            }
            MedihelpError::Unreachable(msg) => {
                format!("Error finding nearby hospitals: {}", msg)
            }
            MedihelpError::LocationLookup(_) | MedihelpError::LocationUnavailable(_) => {
                "Could not determine your location. Please provide your location manually."
                    .to_string()
            }
            MedihelpError::Validation(msg) => msg.clone(),
            other => other.format_simple(),
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MedihelpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MedihelpError {}

// 便捷的构造函数
impl MedihelpError {
    pub fn throttled<T: Into<String>>(msg: T) -> Self {
        MedihelpError::Throttled(msg.into())
    }

    pub fn upstream_status(status: u16) -> Self {
        MedihelpError::UpstreamStatus(status)
    }

    pub fn malformed_response<T: Into<String>>(msg: T) -> Self {
        MedihelpError::MalformedResponse(msg.into())
    }

    pub fn unreachable<T: Into<String>>(msg: T) -> Self {
        MedihelpError::Unreachable(msg.into())
    }

    pub fn location_lookup<T: Into<String>>(msg: T) -> Self {
        MedihelpError::LocationLookup(msg.into())
    }

    pub fn location_unavailable<T: Into<String>>(msg: T) -> Self {
        MedihelpError::LocationUnavailable(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        MedihelpError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        MedihelpError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        MedihelpError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MedihelpError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for MedihelpError {
    fn from(err: std::io::Error) -> Self {
        MedihelpError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MedihelpError {
    fn from(err: serde_json::Error) -> Self {
        MedihelpError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for MedihelpError {
    fn from(err: ureq::Error) -> Self {
        MedihelpError::Unreachable(err.to_string())
    }
}

impl From<config::ConfigError> for MedihelpError {
    fn from(err: config::ConfigError) -> Self {
        MedihelpError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MedihelpError {
    fn from(err: toml::ser::Error) -> Self {
        MedihelpError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MedihelpError>;
