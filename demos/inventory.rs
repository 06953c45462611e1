use tracing_subscriber::EnvFilter;
use xtremio_client::{XtremioClient, XtremioResource, XtremioResult};

#[tokio::main]
async fn main() -> XtremioResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = XtremioClient::builder()
        .host("xms.example.com")?
        .credentials("admin", "Xtrem10")?
        .build()?;

    for cluster in client.clusters().await? {
        println!("{} ({})", cluster, cluster.identity().name());

        for brick in cluster.bricks().await? {
            println!("  {}", brick);
            for ssd in brick.ssds().await? {
                println!("    {}", ssd);
            }
        }

        for dae in cluster.daes().await? {
            println!("  {}", dae);
            for psu in dae.dae_psus().await? {
                println!("    {}", psu);
            }
        }
    }

    client.set_active_scope("xbrick1").await?;
    for volume in client.volumes().await? {
        let snapshots = match volume.snapshots().await? {
            Some(snapshots) => snapshots.len().to_string(),
            None => "n/a".to_string(),
        };
        println!("{} snapshots: {}", volume, snapshots);
    }

    Ok(())
}
