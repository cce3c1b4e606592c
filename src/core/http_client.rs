use reqwest::Client;

pub fn build_http_client(disable_proxy: bool) -> Result<Client, reqwest::Error> {
    // No request timeout: the outbound call runs until the transport resolves.
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
