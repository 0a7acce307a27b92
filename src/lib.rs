pub mod shared {
    pub mod application {
        pub mod service_error;
    }
    pub mod core {
        pub mod errors;
        pub mod outcome;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod store {
            pub mod in_memory;
            pub mod sqlite;
        }
    }
    pub mod config;
    pub mod logging;
}

pub mod modules {
    pub mod workers {
        pub mod core {
            pub mod dto;
            pub mod ports;
            pub mod worker;
        }
        pub mod application {
            pub mod worker_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
    pub mod shifts {
        pub mod core {
            pub mod dto;
            pub mod ports;
            pub mod shift;
        }
        pub mod application {
            pub mod shift_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
}

pub mod console {
    pub mod client;
    pub mod menu;
    pub mod pagination;
    pub mod render;
    pub mod requests;
    pub mod terminal;
    pub mod ui;
}

pub mod shell;
