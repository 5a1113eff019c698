/// Portal Web Admin Interface Server
///
/// Axum-based server that serves the Leptos web application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portal_web::{app::*, ShellConfig};
    use tower_http::services::ServeDir;
    use tracing::info;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting portal web admin v{}", env!("CARGO_PKG_VERSION"));

    let shell_config = ShellConfig::load()?;

    // get_configuration(None) reads cargo-leptos's env values
    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(shell_config.clone()),
            App,
        )
        .fallback_service(ServeDir::new(&leptos_options.site_root))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Portal web admin listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
