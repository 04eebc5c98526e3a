//! Task networking: awsvpc configuration, port bindings and interfaces.

use super::enums::TransportProtocol;

string_enum! {
    pub enum AssignPublicIp {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

shape! {
    /// Subnets and security groups for a task or service using the `awsvpc`
    /// network mode.
    pub struct AwsVpcConfiguration {
        /// Up to 16 subnet IDs, all from the same VPC.
        subnets: list String,
        /// Up to 5 security group IDs. The VPC default group is used when
        /// absent.
        security_groups: list String,
        assign_public_ip: nested AssignPublicIp,
    }
}

shape! {
    pub struct NetworkConfiguration {
        awsvpc_configuration: nested AwsVpcConfiguration,
    }
}

shape! {
    /// A port binding between a container and its host.
    pub struct NetworkBinding {
        #[serde(rename = "bindIP")]
        bind_ip: text String,
        container_port: scalar i32,
        host_port: scalar i32,
        protocol: nested TransportProtocol,
    }
}

shape! {
    /// An elastic network interface attached to a task.
    pub struct NetworkInterface {
        attachment_id: text String,
        private_ipv4_address: text String,
        ipv6_address: text String,
    }
}
