pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod access;
            pub mod actor;
            pub mod aggregation;
            pub mod approval;
            pub mod calendar;
            pub mod errors;
            pub mod hierarchy;
            pub mod phase_index;
            pub mod ports;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod context;
            pub mod errors;
            pub mod authorize {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_datepoint {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_datepoint {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod toggle_approval {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_lifecycle {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_hierarchy {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod phase_index {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize {
                pub mod decide;
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_datepoints {
                pub mod decide;
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod in_memory_entity_store;
            }
        }
    }
}

pub mod shell;
