//! tracing 구독자 초기화.
//!
//! 설정 파일을 읽기 전에 구독자를 먼저 띄워 로드 이벤트가 남게 하고,
//! 설정을 읽은 뒤에는 필터만 교체한다.

use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

const FALLBACK_FILTER: &str = "info";

/// 설정 파일의 필터를 나중에 적용하기 위한 핸들.
pub struct LogHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
    env_override: bool,
}

/// `RUST_LOG`가 있으면 그 값으로, 없으면 `info`로 구독자를 설치한다.
/// 이미 설치된 구독자가 있으면 아무것도 바꾸지 않는다.
pub fn init() -> LogHandle {
    let env = EnvFilter::try_from_default_env().ok();
    let env_override = env.is_some();
    let initial = env.unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER));
    let (filter, handle) = reload::Layer::new(initial);
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();
    LogHandle {
        reload: installed.then_some(handle),
        env_override,
    }
}

impl LogHandle {
    /// 설정의 필터 문자열로 교체한다. `RUST_LOG`가 우선하며, 잘못된 문자열은 `info`로 대체한다.
    pub fn apply_config_filter(&self, filter: &str) {
        if self.env_override {
            return;
        }
        let Some(handle) = &self.reload else {
            return;
        };
        let parsed = EnvFilter::try_new(filter).unwrap_or_else(|e| {
            warn!(filter, error = %e, "invalid log filter in configuration, using info");
            EnvFilter::new(FALLBACK_FILTER)
        });
        if let Err(e) = handle.reload(parsed) {
            warn!(error = %e, "log filter could not be replaced");
        }
    }
}
