//! Storage provider catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object-storage providers a backend can be configured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Amazon S3 and S3-compatible services.
    S3,
    /// Self-hosted MinIO.
    Minio,
    /// Alibaba Cloud OSS.
    Oss,
    /// Tencent Cloud COS.
    Cos,
    /// Qiniu Kodo.
    Kodo,
    /// Huawei Cloud OBS.
    Obs,
}

impl ProviderKind {
    /// Every provider supported by this build, in catalog order.
    pub fn all() -> &'static [ProviderKind] {
        &[
            Self::S3,
            Self::Minio,
            Self::Oss,
            Self::Cos,
            Self::Kodo,
            Self::Obs,
        ]
    }

    /// Return the provider as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Minio => "minio",
            Self::Oss => "oss",
            Self::Cos => "cos",
            Self::Kodo => "kodo",
            Self::Obs => "obs",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = skyvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "minio" => Ok(Self::Minio),
            "oss" => Ok(Self::Oss),
            "cos" => Ok(Self::Cos),
            "kodo" => Ok(Self::Kodo),
            "obs" => Ok(Self::Obs),
            _ => Err(skyvault_core::AppError::validation(format!(
                "Invalid storage provider: '{s}'. Expected one of: s3, minio, oss, cos, kodo, obs"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("s3".parse::<ProviderKind>().unwrap(), ProviderKind::S3);
        assert_eq!("MINIO".parse::<ProviderKind>().unwrap(), ProviderKind::Minio);
        assert!("gcs".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_catalog_is_complete() {
        let catalog = ProviderKind::all();
        assert_eq!(catalog.len(), 6);
        for kind in catalog {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), *kind);
        }
    }
}
