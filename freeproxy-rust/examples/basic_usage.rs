use std::time::Duration;

use freeproxy_rust::{FreeproxyClient, FreeproxyOptions, QueryParams};

#[tokio::main]
async fn main() {
    // The SDK imposes no timeout of its own, so give the transport one
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to build HTTP client");

    let api_key = "your-api-key-here"; // Replace with your actual API key
    let client = FreeproxyClient::new_with_options(
        api_key,
        Some(FreeproxyOptions {
            http_client: Some(http_client),
            ..FreeproxyOptions::new()
        }),
    );

    println!("Example 1: Get all proxies on page 1");
    match client.query_page(1).await {
        Ok(response) => {
            println!("Got {} proxies", response.len());
            for (i, proxy) in response.iter().enumerate() {
                println!(
                    "Proxy {}: {}://{}:{} (Country: {})",
                    i + 1,
                    proxy.protocol,
                    proxy.ip,
                    proxy.port,
                    proxy.country_code
                );
            }
        }
        Err(e) => eprintln!("Failed to get proxies: {e}"),
    }

    println!("\nExample 2: Get US proxies with SOCKS5 protocol on page 1");
    let params = QueryParams::builder()
        .country(Some("US".to_string()))
        .protocol(Some("socks5".to_string()))
        .page(Some(1))
        .build();

    match client.query(&params).await {
        Ok(response) => {
            println!("Got {} US SOCKS5 proxies", response.len());
            for (i, proxy) in response.iter().take(3).enumerate() {
                println!(
                    "Proxy {}: {} (Uptime: {}%, Response time: {:.2}s)",
                    i + 1,
                    proxy.proxy_url,
                    proxy.uptime,
                    proxy.response_time
                );
            }
        }
        Err(e) => eprintln!("Failed to get proxies: {e}"),
    }

    println!("\nExample 3: Get proxies from GB on page 2");
    let params = QueryParams {
        country: Some("GB".to_string()),
        page: Some(2),
        ..QueryParams::new()
    };

    match client.query(&params).await {
        Ok(response) => println!("Got {} proxies from GB on page 2", response.len()),
        Err(e) => eprintln!("Failed to get proxies: {e}"),
    }

    println!("\nExample 4: Error handling with invalid API key");
    let invalid_client = FreeproxyClient::new("invalid-api-key");
    if let Err(e) = invalid_client.query(&QueryParams::new()).await {
        println!("Error occurred (as expected): [{}] {}", e.name(), e);
    }
}
