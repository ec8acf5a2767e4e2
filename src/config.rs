// Launch plan: which creators the app demonstrates, and how.
//
// The plan ships inside the binary; nothing is read from disk or the
// environment at runtime.

use serde::Deserialize;
use tracing::Level;

use crate::error::{AppError, Result};
use crate::kind::CreatorKind;

const EMBEDDED_PLAN: &str = include_str!("../default_plan.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchPlan {
    pub launches: Vec<CreatorKind>,
    pub separator: String,
    pub log_level: String,
}

impl Default for LaunchPlan {
    fn default() -> Self {
        Self {
            launches: CreatorKind::ALL.to_vec(),
            separator: "\n\n".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl LaunchPlan {
    pub fn from_toml(content: &str) -> Result<Self> {
        let plan: LaunchPlan = toml::from_str(content)?;
        plan.validate()?;
        Ok(plan)
    }

    /// The plan compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_PLAN)
    }

    pub fn validate(&self) -> Result<()> {
        if self.launches.is_empty() {
            return Err(AppError::EmptyPlan);
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| AppError::InvalidLogLevel {
                level: self.log_level.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_plan_matches_default() {
        let plan = LaunchPlan::embedded().unwrap();
        assert_eq!(plan, LaunchPlan::default());
        assert_eq!(plan.launches, vec![CreatorKind::A, CreatorKind::B]);
        assert_eq!(plan.separator, "\n\n");
        assert_eq!(plan.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let plan = LaunchPlan::from_toml(r#"launches = ["b"]"#).unwrap();
        assert_eq!(plan.launches, vec![CreatorKind::B]);
        assert_eq!(plan.separator, "\n\n");
        assert_eq!(plan.log_level, "warn");
    }

    #[test]
    fn test_order_is_preserved() {
        let plan = LaunchPlan::from_toml(
            r#"launches = ["ConcreteCreator2", "ConcreteCreator1", "2"]"#,
        )
        .unwrap();
        assert_eq!(
            plan.launches,
            vec![CreatorKind::B, CreatorKind::A, CreatorKind::B]
        );
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = LaunchPlan::from_toml("launches = []").unwrap_err();
        assert!(matches!(err, AppError::EmptyPlan));
    }

    #[test]
    fn test_unknown_creator_rejected() {
        let err = LaunchPlan::from_toml(r#"launches = ["ConcreteCreator9"]"#).unwrap_err();
        assert!(matches!(err, AppError::Plan(_)));
        assert!(err.to_string().contains("ConcreteCreator9"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LaunchPlan::from_toml("verbose = true").unwrap_err();
        assert!(matches!(err, AppError::Plan(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = LaunchPlan::from_toml(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, AppError::InvalidLogLevel { ref level } if level == "loud"));
    }
}
