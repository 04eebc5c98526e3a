//! Data volumes declared by task definitions.

string_enum! {
    /// Lifetime of a Docker volume.
    pub enum Scope {
        /// Provisioned when the task starts, destroyed when it stops.
        Task => "task",
        /// Persists after the task stops.
        Shared => "shared",
    }
}

string_enum! {
    pub enum EfsTransitEncryption {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum EfsAuthorizationConfigIam {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

shape! {
    pub struct HostVolumeProperties {
        source_path: text String,
    }
}

shape! {
    /// A Docker volume managed through a volume driver.
    pub struct DockerVolumeConfiguration {
        scope: nested Scope,
        /// Only valid with the `shared` scope.
        autoprovision: scalar bool,
        driver: text String,
        driver_opts: map String,
        labels: map String,
    }
}

shape! {
    pub struct EfsAuthorizationConfig {
        access_point_id: text String,
        iam: nested EfsAuthorizationConfigIam,
    }
}

shape! {
    /// An Amazon EFS file system mounted into the task.
    pub struct EfsVolumeConfiguration {
        file_system_id: text String,
        root_directory: text String,
        transit_encryption: nested EfsTransitEncryption,
        transit_encryption_port: scalar i32,
        authorization_config: nested EfsAuthorizationConfig,
    }
}

shape! {
    /// A named volume referenced by container mount points.
    pub struct Volume {
        name: text String,
        host: nested HostVolumeProperties,
        docker_volume_configuration: nested DockerVolumeConfiguration,
        efs_volume_configuration: nested EfsVolumeConfiguration,
    }
}
