//! Device profiles — one desktop, one iPhone-12-class mobile.

use anyhow::{anyhow, Result};
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetDeviceMetricsOverrideParams, SetUserAgentOverrideParams,
};
use chromiumoxide::Page;

const IPHONE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1";

/// Viewport and identity for one capture pass.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    /// Screenshot file name prefix, e.g. `screen-desktop`.
    pub prefix: &'static str,
    pub width: i64,
    pub height: i64,
    pub device_scale_factor: f64,
    pub mobile: bool,
    pub user_agent: Option<&'static str>,
}

pub const DESKTOP: DeviceProfile = DeviceProfile {
    prefix: "screen-desktop",
    width: 1280,
    height: 800,
    device_scale_factor: 1.0,
    mobile: false,
    user_agent: None,
};

pub const MOBILE: DeviceProfile = DeviceProfile {
    prefix: "screen-mobile",
    width: 390,
    height: 844,
    device_scale_factor: 3.0,
    mobile: true,
    user_agent: Some(IPHONE_USER_AGENT),
};

impl DeviceProfile {
    /// Apply viewport metrics and user agent overrides to a page.
    pub async fn apply(&self, page: &Page) -> Result<()> {
        let metrics = SetDeviceMetricsOverrideParams::builder()
            .width(self.width)
            .height(self.height)
            .device_scale_factor(self.device_scale_factor)
            .mobile(self.mobile)
            .build()
            .map_err(|e| anyhow!(e))?;
        page.execute(metrics).await?;

        if let Some(user_agent) = self.user_agent {
            let ua = SetUserAgentOverrideParams::builder()
                .user_agent(user_agent)
                .build()
                .map_err(|e| anyhow!(e))?;
            page.execute(ua).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_profile_shape() {
        assert_eq!(DESKTOP.prefix, "screen-desktop");
        assert_eq!((DESKTOP.width, DESKTOP.height), (1280, 800));
        assert!(!DESKTOP.mobile);
        assert!(DESKTOP.user_agent.is_none());
    }

    #[test]
    fn mobile_profile_shape() {
        assert_eq!(MOBILE.prefix, "screen-mobile");
        assert_eq!((MOBILE.width, MOBILE.height), (390, 844));
        assert!(MOBILE.mobile);
        assert!(MOBILE.user_agent.unwrap().contains("iPhone"));
    }
}
