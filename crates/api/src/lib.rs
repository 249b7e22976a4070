mod error;
mod job_schedulers;
mod reminder;
mod shared;
mod status;
mod tools;
mod transaction;
mod transaction_type;
mod user;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use job_schedulers::ReminderScheduler;
use plazo_infra::PlazoContext;
use shared::usecase::execute;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use transaction_type::init_default_types::InitDefaultTypesUseCase;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    status::configure_routes(cfg);
    tools::configure_routes(cfg);
    transaction::configure_routes(cfg);
    transaction_type::configure_routes(cfg);
    user::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: ReminderScheduler,
}

impl Application {
    pub async fn new(context: PlazoContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;

        let _ = execute(InitDefaultTypesUseCase {}, &context).await;

        let scheduler = ReminderScheduler::new();
        scheduler.start(context);

        Ok(Self {
            server,
            port,
            scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheduler(&self) -> &ReminderScheduler {
        &self.scheduler
    }

    async fn configure_server(context: PlazoContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        self.scheduler.stop();
        res
    }
}
