/// Await `ms` milliseconds. Browser timer in WASM builds; pends
/// forever on native, where nothing drives these loops anyway.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = ms;
        std::future::pending::<()>().await;
    }
}
