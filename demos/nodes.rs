//! Node lifecycle walkthrough: create, modify, list, delete.
//!
//! Reads the panel URL and application key from `CROC_URL` / `CROC_KEY`.

use crocgodyl::{Application, CreateNodeDescriptor, CrocError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = env::var("CROC_URL")?;
    let key = env::var("CROC_KEY")?;
    let app = Application::new(&url, key)?;

    let host = url.split("//").nth(1).unwrap_or(&url);
    let node = match app
        .nodes()
        .create(CreateNodeDescriptor {
            name: "croc-node-1".to_string(),
            location_id: 1,
            public: true,
            fqdn: format!("test.nodes.{host}"),
            scheme: "https".to_string(),
            behind_proxy: false,
            memory: 16000,
            memory_overallocate: 0,
            disk: 1024,
            disk_overallocate: 0,
            daemon_base: "/var/lib/pterodactyl/volumes".to_string(),
            daemon_sftp: 2022,
            daemon_listen: 8080,
            upload_size: 100,
        })
        .await
    {
        Ok(node) => node,
        Err(err) => return Ok(handle_error(err)),
    };

    println!("ID: {} - Name: {} - Public: {}", node.id, node.name, node.public);

    let mut fields = node.update_descriptor();
    fields.public = false;
    let node = match app.nodes().update(node.id, fields).await {
        Ok(node) => node,
        Err(err) => return Ok(handle_error(err)),
    };

    println!("ID: {} - Name: {} - Public: {}", node.id, node.name, node.public);

    for n in app.nodes().list().await? {
        println!("{}: {}", n.id, n.name);
    }

    if let Err(err) = app.nodes().delete(node.id).await {
        handle_error(err);
    }

    Ok(())
}

fn handle_error(err: CrocError) {
    match err {
        CrocError::Api(errs) => {
            for e in &errs.errors {
                eprintln!("{e}");
            }
        }
        other => eprintln!("{other}"),
    }
}
