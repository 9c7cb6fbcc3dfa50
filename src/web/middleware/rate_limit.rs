//! Rate limiting middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    num::NonZeroU32,
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use crate::web::error::ApiError;

/// Per-IP rate limiter using Governor.
pub type IpRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// State for rate limiting.
pub struct RateLimitState {
    /// Per-IP rate limiters for the contact endpoint.
    contact_limiters: RwLock<HashMap<String, Arc<IpRateLimiter>>>,
    /// Contact rate limit (requests per minute).
    contact_rate_limit: u32,
}

impl RateLimitState {
    /// Create a new rate limit state.
    pub fn new(contact_rate_limit: u32) -> Self {
        Self {
            contact_limiters: RwLock::new(HashMap::new()),
            contact_rate_limit,
        }
    }

    /// Get or create a rate limiter for the given IP.
    fn get_or_create_limiter(
        limiters: &RwLock<HashMap<String, Arc<IpRateLimiter>>>,
        ip: &str,
        requests_per_minute: u32,
    ) -> Arc<IpRateLimiter> {
        {
            let read_guard = limiters.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(limiter) = read_guard.get(ip) {
                return limiter.clone();
            }
        }

        let mut write_guard = limiters.write().unwrap_or_else(PoisonError::into_inner);

        // Double-check after acquiring write lock
        if let Some(limiter) = write_guard.get(ip) {
            return limiter.clone();
        }

        let quota =
            Quota::per_minute(NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN));
        let limiter = Arc::new(RateLimiter::direct(quota));
        write_guard.insert(ip.to_string(), limiter.clone());
        limiter
    }

    /// Check if a contact request is allowed.
    pub fn check_contact(&self, ip: &str) -> bool {
        let limiter =
            Self::get_or_create_limiter(&self.contact_limiters, ip, self.contact_rate_limit);
        limiter.check().is_ok()
    }

    /// Drop limiters that nobody holds.
    pub fn cleanup(&self) {
        let mut guard = self
            .contact_limiters
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.retain(|_, v| Arc::strong_count(v) > 1);
    }

    /// Start a background task to periodically clean up old entries.
    pub fn start_cleanup_task(self: Arc<Self>) {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(300)).await; // Every 5 minutes
                self.cleanup();
            }
        });
    }
}

/// Extract client IP from request.
fn get_client_ip(req: &Request<Body>) -> String {
    // Reverse proxy header first
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(ip) = forwarded.split(',').next() {
            return ip.trim().to_string();
        }
    }

    if let Some(real_ip) = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
    {
        return real_ip.to_string();
    }

    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

/// Rate limiting middleware for the contact endpoint.
pub async fn contact_rate_limit(
    state: Arc<RateLimitState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let ip = get_client_ip(&req);

    if !state.check_contact(&ip) {
        tracing::warn!(ip = %ip, "Contact rate limit exceeded");
        return ApiError::too_many_requests("Too many requests. Please try again later.")
            .into_response();
    }

    next.run(req).await
}
