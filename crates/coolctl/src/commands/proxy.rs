//! `coolctl proxy` — servers plus the Traefik routing table.
//!
//! The two fetches are independent hosts, so they run concurrently. A
//! missing Traefik configuration yields an empty snapshot, and the
//! sections simply stay empty.

use colored::Colorize;
use coolify_api::{
    classify_proxy, classify_traefik, extract_host_from_rule, proxy_status_text, CoolifyClient,
    TraefikClient,
};

use super::{health_cell, rule};

pub async fn execute(client: &CoolifyClient, traefik: &TraefikClient) -> anyhow::Result<()> {
    let (servers, snapshot) =
        tokio::try_join!(client.list_servers(), traefik.fetch_raw_data())?;

    println!("{}", "SERVERS".bold());
    if servers.is_empty() {
        println!("(no servers)");
    }
    for server in &servers {
        println!(
            "  {:<20} {:<22} {}",
            server.name,
            format!("{}:{}", server.ip, server.port),
            health_cell(classify_proxy(server), &proxy_status_text(server))
        );
    }

    if !snapshot.routers.is_empty() {
        println!("\n{}", "TRAEFIK ROUTES".bold());
        println!(
            "  {:<34} {:<28} {:<10} ENTRYPOINTS",
            "HOST".bold(),
            "SERVICE".bold(),
            "STATUS".bold()
        );
        println!("  {}", rule(90).dimmed());
        for router in &snapshot.routers {
            let host = extract_host_from_rule(&router.rule).unwrap_or(&router.name);
            println!(
                "  {:<34} {:<28} {:<10} {}",
                host,
                router.service,
                health_cell(classify_traefik(&router.status), &router.status),
                router.entry_points.join(", ")
            );
        }
    }

    if !snapshot.services.is_empty() {
        println!("\n{}", "TRAEFIK SERVICES".bold());
        for service in &snapshot.services {
            let backends = service
                .load_balancer
                .as_ref()
                .map(|lb| lb.servers.len())
                .unwrap_or(0);
            println!(
                "  {:<40} {:<10} {} backend{}",
                service.name,
                health_cell(classify_traefik(&service.status), &service.status),
                backends,
                if backends == 1 { "" } else { "s" }
            );
        }
    }
    Ok(())
}
