pub mod shared {
    pub mod infrastructure {
        pub mod sqlite {
            pub mod connection;
            pub mod migrations;
        }
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod ports;
            pub mod query;
        }
        pub mod application {
            pub mod errors;
            pub mod query_translator;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events_by_period {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
                pub mod event_store_sqlite;
            }
        }
    }
}

pub mod shell;
