use crate::models::Output;
use crate::State;

impl State {
    pub fn output_attached_handler(&mut self, output: Output) {
        tracing::info!("Output {} attached ({}x{})", output.name, output.width, output.height);
        if let Some(known) = self.outputs.iter_mut().find(|o| o.name == output.name) {
            *known = output;
        } else {
            self.outputs.push(output);
        }
        self.apply_layout(self.active_workspace);
    }

    pub fn output_detached_handler(&mut self, name: &str) {
        let before = self.outputs.len();
        self.outputs.retain(|o| o.name != name);
        if before == self.outputs.len() {
            tracing::debug!("Detach for unknown output {}", name);
            return;
        }
        tracing::info!("Output {} detached", name);
        self.apply_layout(self.active_workspace);
    }
}
