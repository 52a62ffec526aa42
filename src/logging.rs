use crate::domain::Order;
use log::{debug, error, info, warn};

pub fn log_rejection(reason: &str) {
    error!("❌ Rejected: {}", reason);
}

pub fn log_order_generated(order: &Order) {
    debug!(
        "🧾 Order built | network={} maker={} {} {} ⇄ taker={} {} {} | expires={}",
        order.network_id,
        order.maker.address,
        order.maker.amount,
        order.maker.token.symbol,
        order.taker.address,
        order.taker.amount,
        order.taker.token.symbol,
        order.expiration
    );
}

pub fn log_untranslated_error(code: &str) {
    warn!("⚠️ No human readable message for error code {}", code);
}

pub fn log_u2f_result(supported: bool, via: &str) {
    if supported {
        info!("🔐 U2F supported ({})", via);
    } else {
        warn!("🔐 U2F not supported ({})", via);
    }
}
