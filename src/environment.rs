use crate::config::{DomainConfig, LayoutConfig};
use crate::domain::{Environment, ScreenWidth};

/// Read-only view of the host page: viewport, fonts, location, user agent.
pub trait EnvironmentOracle {
    fn inner_width(&self) -> Option<f64>;
    fn document_client_width(&self) -> Option<f64>;
    fn body_client_width(&self) -> Option<f64>;
    fn root_font_size_px(&self) -> f64;
    fn host(&self) -> String;
    fn user_agent(&self) -> String;
}

/// Fixed snapshot of an environment.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticEnvironment {
    pub inner_width: Option<f64>,
    pub document_client_width: Option<f64>,
    pub body_client_width: Option<f64>,
    pub root_font_size_px: f64,
    pub host: String,
    pub user_agent: String,
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self {
            inner_width: None,
            document_client_width: None,
            body_client_width: None,
            root_font_size_px: 16.0,
            host: String::new(),
            user_agent: String::new(),
        }
    }
}

impl EnvironmentOracle for StaticEnvironment {
    fn inner_width(&self) -> Option<f64> {
        self.inner_width
    }

    fn document_client_width(&self) -> Option<f64> {
        self.document_client_width
    }

    fn body_client_width(&self) -> Option<f64> {
        self.body_client_width
    }

    fn root_font_size_px(&self) -> f64 {
        self.root_font_size_px
    }

    fn host(&self) -> String {
        self.host.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

// Same token list the is-mobile package matches on. Android, bbNN and MeeGo
// only count when "mobile" follows them (tablets don't), see `is_user_on_mobile`.
const MOBILE_UA_TOKENS: &[&str] = &[
    "avantgo",
    "bada/",
    "blackberry",
    "blazer",
    "compal",
    "elaine",
    "fennec",
    "hiptop",
    "iemobile",
    "iphone",
    "ipod",
    "iris",
    "kindle",
    "lge ",
    "maemo",
    "midp",
    "mmp",
    "netfront",
    "opera mobi",
    "opera mini",
    "palm",
    "phone",
    "pixi/",
    "pre/",
    "plucker",
    "pocket",
    "psp",
    "series40",
    "series60",
    "symbian",
    "treo",
    "up.browser",
    "up.link",
    "vodafone",
    "wap",
    "windows ce",
    "xda",
    "xiino",
];

fn non_zero(width: Option<f64>) -> Option<f64> {
    width.filter(|w| *w > 0.0)
}

pub fn get_screen_width<E: EnvironmentOracle + ?Sized>(env: &E, layout: &LayoutConfig) -> ScreenWidth {
    let width_in_px = non_zero(env.inner_width())
        .or_else(|| non_zero(env.document_client_width()))
        .or_else(|| non_zero(env.body_client_width()))
        .unwrap_or(0.0);
    let width_in_em = width_in_px / env.root_font_size_px();

    // Mirrors the BassCSS lg-/md-/sm- media queries.
    if width_in_em > layout.lg_min_em {
        ScreenWidth::Lg
    } else if width_in_em > layout.md_min_em {
        ScreenWidth::Md
    } else {
        ScreenWidth::Sm
    }
}

/// True when `then` occurs in `ua` past `start`, at least one character later.
fn is_followed_by(ua: &str, start: usize, then: &str) -> bool {
    let mut rest = ua[start..].chars();
    rest.next().is_some() && rest.as_str().contains(then)
}

/// `first.+then`
fn matches_in_order(ua: &str, first: &str, then: &str) -> bool {
    ua.find(first)
        .map(|i| is_followed_by(ua, i + first.len(), then))
        .unwrap_or(false)
}

/// `bb\d+.+mobile`
fn is_mobile_bb(ua: &str) -> bool {
    ua.match_indices("bb").any(|(i, _)| {
        let digits = ua[i + 2..].chars().take_while(|c| c.is_ascii_digit()).count();
        digits > 0 && is_followed_by(ua, i + 2 + digits, "mobile")
    })
}

pub fn is_user_on_mobile<E: EnvironmentOracle + ?Sized>(env: &E) -> bool {
    let ua = env.user_agent().to_lowercase();
    matches_in_order(&ua, "android", "mobile")
        || matches_in_order(&ua, "meego", "mobile")
        || matches_in_order(&ua, "mobile", "firefox")
        || is_mobile_bb(&ua)
        || MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
}

pub fn get_current_environment<E: EnvironmentOracle + ?Sized>(env: &E, domains: &DomainConfig) -> Environment {
    let host = env.host();
    if host == domains.development {
        Environment::Development
    } else if host == domains.staging {
        Environment::Staging
    } else if host == domains.production {
        Environment::Production
    } else {
        Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_width_em(em: f64) -> StaticEnvironment {
        StaticEnvironment {
            inner_width: Some(em * 16.0),
            ..StaticEnvironment::default()
        }
    }

    #[test]
    fn screen_width_breakpoints_are_exclusive() {
        let layout = LayoutConfig::default();
        assert_eq!(get_screen_width(&env_with_width_em(65.0), &layout), ScreenWidth::Lg);
        assert_eq!(get_screen_width(&env_with_width_em(64.0), &layout), ScreenWidth::Md);
        assert_eq!(get_screen_width(&env_with_width_em(53.0), &layout), ScreenWidth::Md);
        assert_eq!(get_screen_width(&env_with_width_em(52.0), &layout), ScreenWidth::Sm);
        assert_eq!(get_screen_width(&env_with_width_em(10.0), &layout), ScreenWidth::Sm);
    }

    #[test]
    fn screen_width_falls_back_to_document_then_body() {
        let layout = LayoutConfig::default();
        let env = StaticEnvironment {
            inner_width: Some(0.0),
            document_client_width: None,
            body_client_width: Some(1200.0),
            root_font_size_px: 10.0,
            ..StaticEnvironment::default()
        };
        assert_eq!(get_screen_width(&env, &layout), ScreenWidth::Lg);

        let env = StaticEnvironment {
            document_client_width: Some(600.0),
            body_client_width: Some(1200.0),
            root_font_size_px: 10.0,
            ..StaticEnvironment::default()
        };
        assert_eq!(get_screen_width(&env, &layout), ScreenWidth::Md);
    }

    #[test]
    fn mobile_user_agents() {
        let iphone = StaticEnvironment {
            user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 11_0 like Mac OS X) AppleWebKit/604.1.38".into(),
            ..StaticEnvironment::default()
        };
        let desktop = StaticEnvironment {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:58.0) Gecko/20100101 Firefox/58.0".into(),
            ..StaticEnvironment::default()
        };
        assert!(is_user_on_mobile(&iphone));
        assert!(!is_user_on_mobile(&desktop));
    }

    fn ua(user_agent: &str) -> StaticEnvironment {
        StaticEnvironment {
            user_agent: user_agent.to_string(),
            ..StaticEnvironment::default()
        }
    }

    #[test]
    fn android_tablets_are_not_mobile() {
        let tablet = ua("Mozilla/5.0 (Linux; Android 9; SM-T820) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/76.0.3809.111 Safari/537.36");
        let phone = ua("Mozilla/5.0 (Linux; Android 9; Pixel 3) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/76.0.3809.111 Mobile Safari/537.36");
        assert!(!is_user_on_mobile(&tablet));
        assert!(is_user_on_mobile(&phone));
    }

    #[test]
    fn device_tokens_must_come_before_mobile() {
        assert!(is_user_on_mobile(&ua(
            "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+ (KHTML, like Gecko) Version/10.0.9.2372 Mobile Safari/537.10+"
        )));
        assert!(!is_user_on_mobile(&ua(
            "Mozilla/5.0 (BB10; Kbd) AppleWebKit/537.35+ (KHTML, like Gecko) Version/10.3.3.2205 Safari/537.35+"
        )));
        assert!(is_user_on_mobile(&ua("Mozilla/5.0 (Mobile; rv:26.0) Gecko/26.0 Firefox/26.0")));
        assert!(!is_user_on_mobile(&ua("Mozilla/5.0 (X11; rv:58.0) Gecko/20100101 Firefox/58.0 Mobile")));
    }

    #[test]
    fn environment_from_host() {
        let domains = DomainConfig::default();
        let at = |host: &str| StaticEnvironment {
            host: host.to_string(),
            ..StaticEnvironment::default()
        };
        assert_eq!(
            get_current_environment(&at(&domains.development), &domains),
            Environment::Development
        );
        assert_eq!(get_current_environment(&at(&domains.staging), &domains), Environment::Staging);
        assert_eq!(
            get_current_environment(&at(&domains.production), &domains),
            Environment::Production
        );
        assert_eq!(get_current_environment(&at("example.org"), &domains), Environment::Production);
    }
}
