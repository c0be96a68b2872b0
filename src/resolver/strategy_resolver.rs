use crate::catalog::cluster_target::{ClusterGroup, ClusterTarget};
use crate::manifest::deployment::DeploymentStrategy;

pub const GLOBAL_PRODUCTION: &str = "global-production";
pub const OXFORD_TESTING: &str = "oxford-testing";

/// Deprecated clusters, dropped from every plan regardless of strategy
pub const BLACKLISTED_CLUSTERS: [&str; 2] = ["kerry", "kirkby"];

/// Deployed only when the chart opts in with "to_on_prem"
pub const ON_PREM_CLUSTERS: [&str; 2] = ["cornwall-testing", "cornwall-production"];

/// Deployed only when the chart opts in with "to_aggregation"
pub const AGGREGATION_CLUSTERS: [&str; 2] = ["aggregation-staging", "aggregation-production"];

pub struct StrategyResolver {
    catalog: Vec<ClusterGroup>,
}

impl StrategyResolver {
    pub fn new(catalog: Vec<ClusterGroup>) -> Self {
        Self { catalog }
    }

    /// Resolution is a pure function of (strategy, catalog); group order
    /// and in-group order follow the catalog declaration.
    pub fn resolve(&self, strategy: &DeploymentStrategy) -> Vec<ClusterGroup> {
        let cluster_groups = match strategy {
            DeploymentStrategy::Custom { custom_strategy } => custom_strategy
                .iter()
                .map(|step| step.group.clone())
                .collect(),
            DeploymentStrategy::Default {
                to_aggregation,
                to_on_prem,
                to_global,
                to_oxford_testing,
                exclude_clusters,
                additional_clusters,
            } => self.resolve_default(
                *to_aggregation,
                *to_on_prem,
                *to_global,
                *to_oxford_testing,
                exclude_clusters,
                additional_clusters,
            ),
        };

        Self::filter_blacklisted_clusters(cluster_groups)
    }

    fn resolve_default(
        &self,
        to_aggregation: bool,
        to_on_prem: bool,
        to_global: bool,
        to_oxford_testing: bool,
        exclude_clusters: &[String],
        additional_clusters: &[ClusterTarget],
    ) -> Vec<ClusterGroup> {
        let mut res_groups: Vec<ClusterGroup> = Vec::new();

        for group in &self.catalog {
            let mut res_group: ClusterGroup = Vec::new();

            for target in group {
                let combined_name = target.to_string();

                // Skip if this cluster is on the exclude list
                if exclude_clusters.contains(&combined_name) {
                    continue;
                }

                // Skip on prem
                if !to_on_prem && ON_PREM_CLUSTERS.contains(&combined_name.as_str()) {
                    continue;
                }

                // Skip aggregation
                if !to_aggregation && AGGREGATION_CLUSTERS.contains(&combined_name.as_str()) {
                    continue;
                }

                // Skip global
                if !to_global && combined_name == GLOBAL_PRODUCTION {
                    continue;
                }

                // Skip oxford-testing
                if !to_oxford_testing && combined_name == OXFORD_TESTING {
                    continue;
                }

                res_group.push(target.clone());
            }

            // An emptied group must not produce an empty wave
            if !res_group.is_empty() {
                res_groups.push(res_group);
            }
        }

        if !additional_clusters.is_empty() {
            res_groups.push(additional_clusters.to_vec());
        }

        res_groups
    }

    fn filter_blacklisted_clusters(cluster_groups: Vec<ClusterGroup>) -> Vec<ClusterGroup> {
        cluster_groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|target| !BLACKLISTED_CLUSTERS.contains(&target.cluster.as_str()))
                    .collect::<ClusterGroup>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(cluster: &str, environment: &str) -> ClusterTarget {
        ClusterTarget {
            cluster: cluster.to_string(),
            environment: environment.to_string(),
        }
    }

    fn default_strategy() -> DeploymentStrategy {
        DeploymentStrategy::Default {
            to_aggregation: false,
            to_on_prem: false,
            to_global: false,
            to_oxford_testing: false,
            exclude_clusters: Vec::new(),
            additional_clusters: Vec::new(),
        }
    }

    fn catalog() -> Vec<ClusterGroup> {
        vec![
            vec![target("alpha", "testing"), target("cornwall", "testing")],
            vec![
                target("alpha", "production"),
                target("cornwall", "production"),
                target("aggregation", "staging"),
                target("aggregation", "production"),
                target("global", "production"),
                target("oxford", "testing"),
            ],
        ]
    }

    #[test]
    fn default_strategy_keeps_plain_targets_in_catalog_order() {
        let resolver = StrategyResolver::new(vec![vec![
            target("alpha", "testing"),
            target("alpha", "production"),
        ]]);

        let groups = resolver.resolve(&default_strategy());

        assert_eq!(
            groups,
            vec![vec![target("alpha", "testing"), target("alpha", "production")]]
        );
    }

    #[test]
    fn default_strategy_skips_opt_in_targets_when_flags_are_off() {
        let resolver = StrategyResolver::new(catalog());

        let groups = resolver.resolve(&default_strategy());

        assert_eq!(
            groups,
            vec![
                vec![target("alpha", "testing")],
                vec![target("alpha", "production")],
            ]
        );
    }

    #[test]
    fn default_strategy_keeps_on_prem_targets_when_enabled() {
        let resolver = StrategyResolver::new(catalog());

        let groups = resolver.resolve(&DeploymentStrategy::Default {
            to_aggregation: false,
            to_on_prem: true,
            to_global: false,
            to_oxford_testing: false,
            exclude_clusters: Vec::new(),
            additional_clusters: Vec::new(),
        });

        assert_eq!(
            groups,
            vec![
                vec![target("alpha", "testing"), target("cornwall", "testing")],
                vec![target("alpha", "production"), target("cornwall", "production")],
            ]
        );
    }

    #[test]
    fn default_strategy_keeps_aggregation_global_and_oxford_when_enabled() {
        let resolver = StrategyResolver::new(catalog());

        let groups = resolver.resolve(&DeploymentStrategy::Default {
            to_aggregation: true,
            to_on_prem: false,
            to_global: true,
            to_oxford_testing: true,
            exclude_clusters: Vec::new(),
            additional_clusters: Vec::new(),
        });

        assert_eq!(
            groups,
            vec![
                vec![target("alpha", "testing")],
                vec![
                    target("alpha", "production"),
                    target("aggregation", "staging"),
                    target("aggregation", "production"),
                    target("global", "production"),
                    target("oxford", "testing"),
                ],
            ]
        );
    }

    #[test]
    fn default_strategy_honors_exclude_list() {
        let resolver = StrategyResolver::new(vec![vec![
            target("alpha", "testing"),
            target("alpha", "production"),
        ]]);

        let groups = resolver.resolve(&DeploymentStrategy::Default {
            to_aggregation: false,
            to_on_prem: false,
            to_global: false,
            to_oxford_testing: false,
            exclude_clusters: vec!["alpha-production".to_string()],
            additional_clusters: Vec::new(),
        });

        assert_eq!(groups, vec![vec![target("alpha", "testing")]]);
    }

    #[test]
    fn default_strategy_drops_groups_emptied_by_filtering() {
        let resolver = StrategyResolver::new(vec![
            vec![target("cornwall", "testing")],
            vec![target("alpha", "testing")],
        ]);

        let groups = resolver.resolve(&default_strategy());

        assert_eq!(groups, vec![vec![target("alpha", "testing")]]);
    }

    #[test]
    fn additional_clusters_form_one_trailing_unfiltered_group() {
        let resolver = StrategyResolver::new(vec![vec![target("alpha", "testing")]]);

        let groups = resolver.resolve(&DeploymentStrategy::Default {
            to_aggregation: false,
            to_on_prem: false,
            to_global: false,
            to_oxford_testing: false,
            exclude_clusters: Vec::new(),
            additional_clusters: vec![
                target("extra", "staging"),
                target("cornwall", "production"),
            ],
        });

        assert_eq!(
            groups,
            vec![
                vec![target("alpha", "testing")],
                vec![target("extra", "staging"), target("cornwall", "production")],
            ]
        );
    }

    #[test]
    fn blacklisted_clusters_never_survive_any_strategy() {
        let resolver = StrategyResolver::new(vec![vec![
            target("kerry", "testing"),
            target("alpha", "testing"),
        ]]);

        let groups = resolver.resolve(&default_strategy());
        assert_eq!(groups, vec![vec![target("alpha", "testing")]]);

        let custom = DeploymentStrategy::Custom {
            custom_strategy: vec![crate::manifest::deployment::CustomStep {
                group: vec![target("kirkby", "production"), target("beta", "production")],
            }],
        };
        let groups = resolver.resolve(&custom);
        assert_eq!(groups, vec![vec![target("beta", "production")]]);
    }

    #[test]
    fn group_emptied_by_the_blacklist_is_dropped() {
        let resolver = StrategyResolver::new(vec![
            vec![target("kerry", "testing"), target("kirkby", "testing")],
            vec![target("alpha", "testing")],
        ]);

        let groups = resolver.resolve(&default_strategy());

        assert_eq!(groups, vec![vec![target("alpha", "testing")]]);
    }

    #[test]
    fn custom_strategy_passes_groups_through_as_declared() {
        let resolver = StrategyResolver::new(catalog());

        let custom = DeploymentStrategy::Custom {
            custom_strategy: vec![
                crate::manifest::deployment::CustomStep {
                    group: vec![target("cornwall", "production")],
                },
                crate::manifest::deployment::CustomStep {
                    group: vec![target("global", "production")],
                },
            ],
        };

        let groups = resolver.resolve(&custom);

        assert_eq!(
            groups,
            vec![
                vec![target("cornwall", "production")],
                vec![target("global", "production")],
            ]
        );
    }
}
