use crate::domain::Group;
use crate::matcher::{match_agent, AgentMatch};

/// Picks the group that best matches a crawler identity
///
/// Every token of every group is scored with [`match_agent`]; the group
/// owning the highest-specificity token wins. Groups tying at the same
/// specificity resolve to the first in document order, which keeps
/// selection deterministic.
///
/// # Arguments
///
/// * `groups` - The document's groups, in document order
/// * `identity` - The concrete crawler identity token
///
/// # Returns
///
/// * `Some(&Group)` - The best-matching group
/// * `None` - No group declares an exact or wildcard token for this
///   identity
pub fn best_matching_group<'a>(groups: &'a [Group], identity: &str) -> Option<&'a Group> {
    let mut best: Option<(AgentMatch, &Group)> = None;

    for group in groups {
        for token in group.user_agents() {
            if let Some(score) = match_agent(token, identity) {
                // Strictly-greater keeps the earlier group on ties
                if best.map_or(true, |(current, _)| score > current) {
                    best = Some((score, group));
                }
            }
        }
    }

    best.map(|(_, group)| group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Robots;

    fn groups_of(text: &str) -> Robots {
        Robots::parse(text).unwrap()
    }

    #[test]
    fn test_exact_beats_wildcard() {
        let robots = groups_of(
            "user-agent: *\ndisallow: /\n\nuser-agent: example-bot\nallow: /\n",
        );
        let group = best_matching_group(robots.groups(), "example-bot").unwrap();
        assert_eq!(group.user_agents(), ["example-bot"]);
    }

    #[test]
    fn test_wildcard_when_no_exact() {
        let robots = groups_of(
            "user-agent: *\ndisallow: /\n\nuser-agent: example-bot\nallow: /\n",
        );
        let group = best_matching_group(robots.groups(), "other-bot").unwrap();
        assert_eq!(group.user_agents(), ["*"]);
    }

    #[test]
    fn test_no_match_at_all() {
        let robots = groups_of("user-agent: example-bot\ndisallow: /\n");
        assert!(best_matching_group(robots.groups(), "other-bot").is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let robots = groups_of("user-agent: Example-Bot\ndisallow: /\n");
        assert!(best_matching_group(robots.groups(), "example-bot").is_some());
    }

    #[test]
    fn test_first_group_wins_specificity_tie() {
        let robots = groups_of(
            "user-agent: example-bot\ndisallow: /first\n\n\
             user-agent: example-bot\ndisallow: /second\n",
        );
        let group = best_matching_group(robots.groups(), "example-bot").unwrap();
        assert_eq!(group.directives()[0].value(), "/first");
    }

    #[test]
    fn test_first_wildcard_group_wins_tie() {
        let robots = groups_of(
            "user-agent: *\ndisallow: /first\n\nuser-agent: *\ndisallow: /second\n",
        );
        let group = best_matching_group(robots.groups(), "any-bot").unwrap();
        assert_eq!(group.directives()[0].value(), "/first");
    }

    #[test]
    fn test_multi_token_group_selected_by_any_token() {
        let robots = groups_of("user-agent: bot-a\nuser-agent: bot-b\ndisallow: /\n");
        assert!(best_matching_group(robots.groups(), "bot-b").is_some());
    }

    #[test]
    fn test_empty_document() {
        let robots = groups_of("");
        assert!(best_matching_group(robots.groups(), "example-bot").is_none());
    }
}
