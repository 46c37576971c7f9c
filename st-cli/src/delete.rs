use std::sync::Arc;

use st_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "identifier of the entity to delete")]
    pub id: EntityId,

    #[arg(long_help = "base URL of the storyteller server", long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    #[arg(
        long_help = "resource path the entity lives under, e.g. stories or locations",
        long,
        default_value = DEFAULT_RESOURCE
    )]
    pub resource: String,
}

pub async fn cmd(args: &Args) -> EmptyResult {
    let env = Arc::new(TerminalEnvironment::stdio()?);
    run(args, env).await
}

pub(crate) async fn run<E: Environment>(args: &Args, env: Arc<E>) -> EmptyResult {
    let endpoint = Endpoint::new(args.endpoint.clone(), &args.resource);
    debug!("deleting {} from {}", args.id, endpoint.base());

    DeleteAction::new(env, endpoint).delete_entity(&args.id).await
}
