pub mod shared {
    pub mod core {
        pub mod local_date_time;
    }
    pub mod infrastructure {
        pub mod keyed_locks;
    }
}

pub mod modules {
    pub mod sport_events {
        pub mod core {
            pub mod event;
            pub mod ids;
            pub mod ports;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_score {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
