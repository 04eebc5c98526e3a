//! Container definitions and the fragments they are built from.

use super::common::KeyValuePair;
use super::enums::TransportProtocol;

string_enum! {
    /// Condition a dependent container waits for.
    pub enum ContainerCondition {
        Start => "START",
        Complete => "COMPLETE",
        Success => "SUCCESS",
        Healthy => "HEALTHY",
    }
}

string_enum! {
    pub enum DeviceCgroupPermission {
        Read => "read",
        Write => "write",
        Mknod => "mknod",
    }
}

string_enum! {
    pub enum UlimitName {
        Core => "core",
        Cpu => "cpu",
        Data => "data",
        Fsize => "fsize",
        Locks => "locks",
        Memlock => "memlock",
        Msgqueue => "msgqueue",
        Nice => "nice",
        Nofile => "nofile",
        Nproc => "nproc",
        Rss => "rss",
        Rtprio => "rtprio",
        Rttime => "rttime",
        Sigpending => "sigpending",
        Stack => "stack",
    }
}

string_enum! {
    pub enum LogDriver {
        JsonFile => "json-file",
        Syslog => "syslog",
        Journald => "journald",
        Gelf => "gelf",
        Fluentd => "fluentd",
        Awslogs => "awslogs",
        Splunk => "splunk",
        Awsfirelens => "awsfirelens",
    }
}

string_enum! {
    pub enum ResourceType {
        Gpu => "GPU",
        InferenceAccelerator => "InferenceAccelerator",
    }
}

string_enum! {
    pub enum FirelensConfigurationType {
        Fluentd => "fluentd",
        Fluentbit => "fluentbit",
    }
}

string_enum! {
    pub enum EnvironmentFileType {
        S3 => "s3",
    }
}

shape! {
    /// A container port published on the host.
    pub struct PortMapping {
        container_port: scalar i32,
        /// Left absent (or `0`) for a dynamically assigned host port in
        /// `bridge` mode. Must equal `container_port` in `awsvpc` mode.
        host_port: scalar i32,
        protocol: nested TransportProtocol,
    }
}

shape! {
    /// A Docker health check run inside the container.
    pub struct HealthCheck {
        /// `["CMD", ...]` to exec directly or `["CMD-SHELL", ...]` to run
        /// through the container's default shell.
        command: list String,
        /// Seconds between checks, 5 to 300. Defaults to 30.
        interval: scalar i32,
        /// Seconds before a check counts as failed, 2 to 60. Defaults to 5.
        timeout: scalar i32,
        /// Consecutive failures before the container is unhealthy, 1 to 10.
        retries: scalar i32,
        /// Grace period in seconds before failures count, 0 to 300.
        start_period: scalar i32,
    }
}

shape! {
    /// A startup or shutdown ordering dependency on another container.
    pub struct ContainerDependency {
        container_name: text String,
        condition: nested ContainerCondition,
    }
}

shape! {
    /// Linux capabilities added to or dropped from Docker's default set.
    pub struct KernelCapabilities {
        add: list String,
        drop: list String,
    }
}

shape! {
    /// A host device exposed to the container.
    pub struct Device {
        host_path: text String,
        container_path: text String,
        permissions: list DeviceCgroupPermission,
    }
}

shape! {
    pub struct Tmpfs {
        container_path: text String,
        /// Size in MiB.
        size: scalar i32,
        mount_options: list String,
    }
}

shape! {
    /// Linux-specific options applied to a container.
    pub struct LinuxParameters {
        capabilities: nested KernelCapabilities,
        devices: list Device,
        init_process_enabled: scalar bool,
        shared_memory_size: scalar i32,
        tmpfs: list Tmpfs,
        max_swap: scalar i32,
        swappiness: scalar i32,
    }
}

shape! {
    pub struct MountPoint {
        source_volume: text String,
        container_path: text String,
        read_only: scalar bool,
    }
}

shape! {
    pub struct VolumeFrom {
        source_container: text String,
        read_only: scalar bool,
    }
}

shape! {
    /// An `/etc/hosts` entry.
    pub struct HostEntry {
        hostname: text String,
        ip_address: text String,
    }
}

shape! {
    pub struct Ulimit {
        name: nested UlimitName,
        soft_limit: scalar i32,
        hard_limit: scalar i32,
    }
}

shape! {
    /// A secret injected from Secrets Manager or Parameter Store.
    pub struct Secret {
        name: text String,
        value_from: text String,
    }
}

shape! {
    /// Log driver settings of a container.
    pub struct LogConfiguration {
        log_driver: nested LogDriver,
        options: map String,
        secret_options: list Secret,
    }
}

shape! {
    /// A namespaced kernel parameter set in the container.
    pub struct SystemControl {
        namespace: text String,
        value: text String,
    }
}

shape! {
    pub struct ResourceRequirement {
        value: text String,
        #[serde(rename = "type")]
        kind: nested ResourceType,
    }
}

shape! {
    /// FireLens log router settings.
    pub struct FirelensConfiguration {
        #[serde(rename = "type")]
        kind: nested FirelensConfigurationType,
        options: map String,
    }
}

shape! {
    /// An S3 object holding environment variables, one `VAR=value` per line.
    pub struct EnvironmentFile {
        value: text String,
        #[serde(rename = "type")]
        kind: nested EnvironmentFileType,
    }
}

shape! {
    pub struct RepositoryCredentials {
        credentials_parameter: text String,
    }
}

shape! {
    /// One container of a task definition.
    pub struct ContainerDefinition {
        name: text String,
        image: text String,
        repository_credentials: nested RepositoryCredentials,
        cpu: scalar i32,
        /// Hard memory limit in MiB.
        memory: scalar i32,
        /// Soft memory limit in MiB.
        memory_reservation: scalar i32,
        links: list String,
        port_mappings: list PortMapping,
        essential: scalar bool,
        entry_point: list String,
        command: list String,
        environment: list KeyValuePair,
        environment_files: list EnvironmentFile,
        mount_points: list MountPoint,
        volumes_from: list VolumeFrom,
        linux_parameters: nested LinuxParameters,
        secrets: list Secret,
        depends_on: list ContainerDependency,
        start_timeout: scalar i32,
        stop_timeout: scalar i32,
        hostname: text String,
        user: text String,
        working_directory: text String,
        disable_networking: scalar bool,
        privileged: scalar bool,
        readonly_root_filesystem: scalar bool,
        dns_servers: list String,
        dns_search_domains: list String,
        extra_hosts: list HostEntry,
        docker_security_options: list String,
        interactive: scalar bool,
        pseudo_terminal: scalar bool,
        docker_labels: map String,
        ulimits: list Ulimit,
        log_configuration: nested LogConfiguration,
        health_check: nested HealthCheck,
        system_controls: list SystemControl,
        resource_requirements: list ResourceRequirement,
        firelens_configuration: nested FirelensConfiguration,
    }
}
