use crate::config::Config;
use crate::data::{Assignee, Comment, Issue, Team, Viewer};
use crate::integrations::{IssueSource, HTTP_CLIENT};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Workflow states fetched from the API; everything else is never shown.
pub const TRACKED_STATES: [&str; 5] = ["In Review", "In Progress", "Blocked", "Todo", "Backlog"];

/// Upper bound for one round trip; the dashboard does not paginate.
const ISSUE_PAGE_SIZE: u32 = 250;

const ISSUES_QUERY: &str = r#"
    query Issues($filter: IssueFilter, $first: Int) {
        issues(filter: $filter, first: $first) {
            nodes {
                id
                identifier
                title
                description
                url
                branchName
                state {
                    name
                }
                assignee {
                    id
                    name
                }
                comments {
                    nodes {
                        body
                        createdAt
                        user {
                            name
                        }
                    }
                }
            }
        }
    }
"#;

const TEAMS_QUERY: &str = r#"
    query Teams {
        teams {
            nodes {
                id
                name
                key
            }
        }
    }
"#;

const VIEWER_QUERY: &str = r#"
    query Viewer {
        viewer {
            id
            name
        }
    }
"#;

// Type-safe API response structures for Linear GraphQL API
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct IssuesData {
    issues: Connection<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct TeamsData {
    teams: Connection<TeamNode>,
}

#[derive(Debug, Deserialize)]
struct ViewerData {
    viewer: UserNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueNode {
    id: String,
    identifier: String,
    title: String,
    description: Option<String>,
    url: String,
    branch_name: Option<String>,
    state: Option<StateNode>,
    assignee: Option<UserNode>,
    comments: Option<Connection<CommentNode>>,
}

#[derive(Debug, Deserialize)]
struct StateNode {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AuthorNode {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentNode {
    body: String,
    created_at: String,
    user: Option<AuthorNode>,
}

#[derive(Debug, Deserialize)]
struct TeamNode {
    id: String,
    name: String,
    key: String,
}

/// GraphQL client for the Linear API.
pub struct LinearClient {
    api_key: String,
}

impl LinearClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
        }
    }

    async fn run<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let mut request = HTTP_CLIENT
            .post(LINEAR_API_URL)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "query": query, "variables": variables }));

        // Without a key the service answers with an authentication error
        if !self.api_key.is_empty() {
            request = request.header("Authorization", &self.api_key);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach Linear API")?;
        let status = response.status();
        let body = response.text().await?;

        decode_response(&body).with_context(|| format!("Linear API returned {}", status))
    }
}

#[async_trait]
impl IssueSource for LinearClient {
    async fn fetch_issues(&self, team_id: Option<&str>) -> Result<Vec<Issue>> {
        let data: IssuesData = self.run(ISSUES_QUERY, issues_variables(team_id)).await?;
        Ok(data.issues.nodes.into_iter().map(parse_issue_node).collect())
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let data: TeamsData = self.run(TEAMS_QUERY, serde_json::json!({})).await?;
        Ok(data
            .teams
            .nodes
            .into_iter()
            .map(|t| Team {
                id: t.id,
                name: t.name,
                key: t.key,
            })
            .collect())
    }

    async fn fetch_viewer(&self) -> Result<Viewer> {
        let data: ViewerData = self.run(VIEWER_QUERY, serde_json::json!({})).await?;
        Ok(Viewer {
            id: data.viewer.id,
            name: data.viewer.name,
        })
    }
}

/// Build the `IssueFilter` variable: tracked states, optionally one team.
fn issues_variables(team_id: Option<&str>) -> serde_json::Value {
    let mut filter = serde_json::json!({
        "state": { "name": { "in": TRACKED_STATES } }
    });
    if let Some(id) = team_id {
        filter["team"] = serde_json::json!({ "id": { "eq": id } });
    }
    serde_json::json!({ "filter": filter, "first": ISSUE_PAGE_SIZE })
}

/// Decode a GraphQL body, turning reported errors into an `Err`.
fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let parsed: GraphQLResponse<T> =
        serde_json::from_str(body).context("Malformed response from Linear API")?;

    if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        bail!("{}", messages.join("; "));
    }

    match parsed.data {
        Some(data) => Ok(data),
        None => bail!("Linear API response contained no data"),
    }
}

fn parse_issue_node(node: IssueNode) -> Issue {
    let comments = node
        .comments
        .map(|c| {
            c.nodes
                .into_iter()
                .map(|comment| Comment {
                    body: comment.body,
                    created_at: comment.created_at,
                    author: comment.user.map(|u| u.name).unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    Issue {
        id: node.id,
        identifier: node.identifier,
        title: node.title,
        description: node.description.unwrap_or_default(),
        url: node.url,
        branch_name: node.branch_name.unwrap_or_default(),
        state: node.state.map(|s| s.name).unwrap_or_default(),
        assignee: node.assignee.map(|a| Assignee {
            id: a.id,
            name: a.name,
        }),
        comments,
    }
}

/// Parse the body of an issues query (exposed for fixtures and debugging).
pub fn parse_issues_response(body: &str) -> Result<Vec<Issue>> {
    let data: IssuesData = decode_response(body)?;
    Ok(data.issues.nodes.into_iter().map(parse_issue_node).collect())
}
