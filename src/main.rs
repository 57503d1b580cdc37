//! `recetapps` server binary. Built with the `ssr` feature.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    // Reads `[package.metadata.leptos]`, overridable through `LEPTOS_*` env vars.
    let conf = leptos::prelude::get_configuration(None)
        .map_err(|e| std::io::Error::other(format!("leptos configuration: {e}")))?;
    let addr = conf.leptos_options.site_addr;
    let app = recetapps::server::app_router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "recetapps listening");
    axum::serve(listener, app).await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
