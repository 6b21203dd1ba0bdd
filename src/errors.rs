use std::fmt;

#[derive(Debug, Clone)]
pub enum GeoLookupError {
    InvalidAddress(String),
    Lookup(String),
    Database(String),
    Config(String),
}

impl GeoLookupError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GeoLookupError::InvalidAddress(_) => "E001",
            GeoLookupError::Lookup(_) => "E002",
            GeoLookupError::Database(_) => "E003",
            GeoLookupError::Config(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GeoLookupError::InvalidAddress(_) => "Invalid IP Address",
            GeoLookupError::Lookup(_) => "Lookup Failed",
            GeoLookupError::Database(_) => "Database Error",
            GeoLookupError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GeoLookupError::InvalidAddress(msg) => msg,
            GeoLookupError::Lookup(msg) => msg,
            GeoLookupError::Database(msg) => msg,
            GeoLookupError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式的致命错误）
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

impl fmt::Display for GeoLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GeoLookupError {}

// 便捷的构造函数
impl GeoLookupError {
    pub fn invalid_address<T: Into<String>>(msg: T) -> Self {
        GeoLookupError::InvalidAddress(msg.into())
    }

    pub fn lookup<T: Into<String>>(msg: T) -> Self {
        GeoLookupError::Lookup(msg.into())
    }

    pub fn database<T: Into<String>>(msg: T) -> Self {
        GeoLookupError::Database(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        GeoLookupError::Config(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<maxminddb::MaxMindDbError> for GeoLookupError {
    fn from(err: maxminddb::MaxMindDbError) -> Self {
        GeoLookupError::Lookup(err.to_string())
    }
}

impl From<std::net::AddrParseError> for GeoLookupError {
    fn from(err: std::net::AddrParseError) -> Self {
        GeoLookupError::InvalidAddress(err.to_string())
    }
}

impl From<std::io::Error> for GeoLookupError {
    fn from(err: std::io::Error) -> Self {
        GeoLookupError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoLookupError>;
