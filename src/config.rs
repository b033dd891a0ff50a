use std::sync::OnceLock;

use crate::error::{TsdbError, TsdbResult};
use crate::series::{DuplicatePolicy, IgnoreFilter};

pub const ARG_DUPLICATE_POLICY: &str = "DUPLICATE_POLICY";
pub const ARG_IGNORE_MAX_TIME_DIFF: &str = "IGNORE_MAX_TIME_DIFF";
pub const ARG_IGNORE_MAX_VAL_DIFF: &str = "IGNORE_MAX_VAL_DIFF";

const ENV_DUPLICATE_POLICY: &str = "VKM_DUPLICATE_POLICY";
const ENV_IGNORE_MAX_TIME_DIFF: &str = "VKM_IGNORE_MAX_TIME_DIFF";
const ENV_IGNORE_MAX_VAL_DIFF: &str = "VKM_IGNORE_MAX_VAL_DIFF";

/// Module wide defaults, applied to series created without explicit options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub duplicate_policy: DuplicatePolicy,
    pub ignore_filter: Option<IgnoreFilter>,
}

impl Settings {
    /// Parse module load arguments, e.g.
    ///
    /// `DUPLICATE_POLICY LAST IGNORE_MAX_TIME_DIFF 10 IGNORE_MAX_VAL_DIFF 0.5`
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> TsdbResult<Self> {
        let mut settings = Settings::default();
        let mut max_time_diff: Option<&str> = None;
        let mut max_val_diff: Option<&str> = None;

        let mut iter = args.iter().map(|x| x.as_ref());
        while let Some(arg) = iter.next() {
            let value = iter.next().ok_or_else(|| {
                TsdbError::InvalidArguments(format!("TSDB: missing value for module argument {arg}"))
            })?;
            match arg {
                arg if arg.eq_ignore_ascii_case(ARG_DUPLICATE_POLICY) => {
                    settings.duplicate_policy = value.parse()?;
                }
                arg if arg.eq_ignore_ascii_case(ARG_IGNORE_MAX_TIME_DIFF) => {
                    max_time_diff = Some(value);
                }
                arg if arg.eq_ignore_ascii_case(ARG_IGNORE_MAX_VAL_DIFF) => {
                    max_val_diff = Some(value);
                }
                _ => {
                    let msg = format!("TSDB: unknown module argument '{arg}'");
                    return Err(TsdbError::InvalidArguments(msg));
                }
            }
        }

        settings.ignore_filter = IgnoreFilter::parse(max_time_diff, max_val_diff)?;
        Ok(settings)
    }

    /// Defaults taken from `VKM_*` environment variables.
    pub fn from_env() -> TsdbResult<Self> {
        let mut settings = Settings::default();
        if let Some(policy) = get_setting_from_env(ENV_DUPLICATE_POLICY) {
            settings.duplicate_policy = policy.parse()?;
        }
        let max_time_diff = get_setting_from_env(ENV_IGNORE_MAX_TIME_DIFF);
        let max_val_diff = get_setting_from_env(ENV_IGNORE_MAX_VAL_DIFF);
        settings.ignore_filter = IgnoreFilter::parse(max_time_diff.as_deref(), max_val_diff.as_deref())?;
        Ok(settings)
    }
}

static GLOBAL_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Install the process wide settings. Returns false if they were already set.
pub fn init_global_settings(settings: Settings) -> bool {
    GLOBAL_SETTINGS.set(settings).is_ok()
}

pub fn get_global_settings() -> &'static Settings {
    GLOBAL_SETTINGS.get_or_init(Settings::default)
}

fn get_setting_from_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
}
