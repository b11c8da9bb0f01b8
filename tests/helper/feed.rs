//! Release feed fixtures served from a mockito server

use mockito::{Mock, ServerGuard};

/// Builds a feed document one product at a time
#[derive(Default)]
pub struct FeedBuilder {
    products: Vec<String>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product with one channel; `builds` are (number, version, fullNumber)
    pub fn with_channel(
        mut self,
        product: &str,
        channel: &str,
        status: &str,
        builds: &[(&str, &str, Option<&str>)],
    ) -> Self {
        let builds: String = builds
            .iter()
            .map(|(number, version, full_number)| {
                let full = full_number
                    .map(|n| format!(r#" fullNumber="{n}""#))
                    .unwrap_or_default();
                format!(r#"      <build number="{number}" version="{version}"{full}/>"#) + "\n"
            })
            .collect();

        self.products.push(format!(
            "  <product name=\"{product}\">\n    <channel name=\"{channel}\" status=\"{status}\">\n{builds}    </channel>\n  </product>\n"
        ));
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<products>\n{}</products>\n",
            self.products.concat()
        )
    }
}

pub async fn mock_feed(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/updates.xml")
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(body)
        .create_async()
        .await
}

/// Makes `path` answer probes successfully
pub async fn mock_artifact(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_body("artifact")
        .create_async()
        .await
}

/// Serves `<path>.sha256`, expected to be requested `hits` times
pub async fn mock_checksum(server: &mut ServerGuard, path: &str, sha256: &str, hits: usize) -> Mock {
    let file = path.rsplit('/').next().unwrap_or(path);
    server
        .mock("GET", format!("{path}.sha256").as_str())
        .with_status(200)
        .with_body(format!("{sha256} *{file}\n"))
        .expect(hits)
        .create_async()
        .await
}
