//! Variable command implementations

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::VariablesApi;
use crate::error::{Error, Result};
use crate::models::VariableListing;
use crate::output;
use crate::repo::resolve_base_repo;
use crate::scope::Scope;

/// Run the `variable list` command
pub async fn list(opts: &GlobalOptions, org: Option<&str>, env: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let scope = Scope::resolve(org, env, || {
        resolve_base_repo(opts.repo_ref(), &ctx.default_host)
    })?;
    let host = scope.host(&ctx.default_host).to_string();
    let client = ctx.client_for(&host)?;

    let listing =
        fetch_listing(&client, &scope, &host, ctx.format.is_interactive()).await?;
    output::print(&listing, ctx.format)
}

/// Fetch the variables of `scope`, ready for rendering.
///
/// Selected-repository counts are only looked up when `interactive` is set,
/// since only the pretty format shows them.
pub async fn fetch_listing<C: VariablesApi>(
    client: &C,
    scope: &Scope,
    host: &str,
    interactive: bool,
) -> Result<VariableListing> {
    let variables = client
        .list_variables(scope, host, interactive)
        .await
        .map_err(Error::listing)?;
    debug!("Fetched {} variables for {}", variables.len(), scope);

    if variables.is_empty() {
        return Err(Error::NoResults("no variables found".to_string()));
    }

    Ok(VariableListing::new(variables, scope.is_organization()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::client::GitHubClient;
    use crate::client::fixtures::{VariableBuilder, page_of, selected_repos_body, variables_page};
    use crate::client::mock::MockTransport;
    use crate::client::models::Visibility;
    use crate::output::Formattable;
    use crate::repo::RepoRef;

    const ORG_URL: &str = "https://api.github.com/orgs/acme/actions/variables?per_page=100";
    const REPOS_URL: &str = "https://api.github.com/orgs/acme/actions/variables/PICKED/repositories";

    fn org() -> Scope {
        Scope::Organization("acme".to_string())
    }

    fn org_client() -> GitHubClient<MockTransport> {
        let mock = MockTransport::new()
            .with_page(
                ORG_URL,
                &page_of(&[
                    VariableBuilder::new("OPEN").visibility(Visibility::Private),
                    VariableBuilder::new("PICKED").selected(REPOS_URL),
                ]),
                None,
            )
            .with_json(REPOS_URL, 200, &selected_repos_body(1));
        GitHubClient::with_transport(mock, None)
    }

    /// Fetch and render the way `list` does for `format`
    async fn render_variables<C: VariablesApi>(
        client: &C,
        scope: &Scope,
        host: &str,
        format: OutputFormat,
    ) -> Result<String> {
        fetch_listing(client, scope, host, format.is_interactive())
            .await?
            .format(format)
    }

    #[tokio::test]
    async fn test_pretty_org_listing_shows_counts() {
        let out = render_variables(&org_client(), &org(), "github.com", OutputFormat::Pretty)
            .await
            .unwrap();

        assert!(out.contains("Visible to private repositories"));
        assert!(out.contains("Visible to 1 selected repository"));
    }

    #[tokio::test]
    async fn test_table_org_listing_skips_lookups() {
        let out = render_variables(&org_client(), &org(), "github.com", OutputFormat::Table)
            .await
            .unwrap();

        assert!(out.contains("PICKED\tvalue-of-picked\t2024-03-15\tSELECTED"));
    }

    #[tokio::test]
    async fn test_repo_listing_across_pages() {
        let first = "https://api.github.com/repos/octo/hello/actions/variables?per_page=100";
        let second = "https://api.github.com/repositories/42/actions/variables?per_page=100&page=2";
        let mock = MockTransport::new()
            .with_page(first, &variables_page(0, 100), Some(second))
            .with_page(second, &variables_page(100, 5), None);
        let client = GitHubClient::with_transport(mock, None);
        let scope = Scope::Repository(RepoRef::new("github.com", "octo", "hello"));

        let out = render_variables(&client, &scope, "github.com", OutputFormat::Table)
            .await
            .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 105);
        assert!(lines[0].starts_with("VAR_000\t"));
        assert!(lines[104].starts_with("VAR_104\t"));
    }

    #[tokio::test]
    async fn test_empty_listing_is_no_results() {
        let mock = MockTransport::new().with_json(ORG_URL, 200, r#"{"total_count":0,"variables":[]}"#);
        let client = GitHubClient::with_transport(mock, None);

        let err = render_variables(&client, &org(), "github.com", OutputFormat::Json)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoResults(_)));
    }

    #[tokio::test]
    async fn test_api_error_propagates() {
        let mock = MockTransport::new().with_json(ORG_URL, 404, r#"{"message":"Not Found"}"#);
        let client = GitHubClient::with_transport(mock, None);

        let err = render_variables(&client, &org(), "github.com", OutputFormat::Pretty)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Listing { .. }));
        assert!(err.to_string().starts_with("failed to get variables: HTTP 404: Not Found"));
        assert_eq!(err.http_status(), Some(404));
    }

    #[tokio::test]
    async fn test_enrichment_failure_carries_listing_context() {
        let mock = MockTransport::new()
            .with_page(
                ORG_URL,
                &page_of(&[VariableBuilder::new("PICKED").selected(REPOS_URL)]),
                None,
            )
            .with_json(REPOS_URL, 403, r#"{"message":"Forbidden"}"#);
        let client = GitHubClient::with_transport(mock, None);

        let err = fetch_listing(&client, &org(), "github.com", true)
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("failed to get variables: failed determining selected repositories for PICKED"));
        assert_eq!(err.http_status(), Some(403));
    }
}
